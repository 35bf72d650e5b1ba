use std::sync::Arc;

use crate::domain::artist::ArtistReadRepository;

pub struct ArtistQueryService {
    pub(super) read_repo: Arc<dyn ArtistReadRepository>,
}

impl ArtistQueryService {
    pub fn new(read_repo: Arc<dyn ArtistReadRepository>) -> Self {
        Self { read_repo }
    }
}
