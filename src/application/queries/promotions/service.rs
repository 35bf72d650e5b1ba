use std::sync::Arc;

use crate::domain::promotion::PromotionReadRepository;

pub struct PromotionQueryService {
    pub(super) read_repo: Arc<dyn PromotionReadRepository>,
}

impl PromotionQueryService {
    pub fn new(read_repo: Arc<dyn PromotionReadRepository>) -> Self {
        Self { read_repo }
    }
}
