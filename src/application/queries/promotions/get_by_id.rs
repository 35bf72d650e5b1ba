use super::PromotionQueryService;
use crate::{
    application::{
        dto::PromotionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::promotion::PromotionId,
};

pub struct GetPromotionQuery {
    pub id: i64,
}

impl PromotionQueryService {
    pub async fn get_promotion(&self, query: GetPromotionQuery) -> ApplicationResult<PromotionDto> {
        let id = PromotionId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("promotion not found"))
    }
}
