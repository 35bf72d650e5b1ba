use super::PromotionQueryService;
use crate::application::{
    dto::{CursorPage, PromotionDto},
    error::ApplicationResult,
    queries::paging,
};

pub struct ListPromotionsQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

impl PromotionQueryService {
    /// Newest promotions first, each with its artist and manager.
    pub async fn list_promotions(
        &self,
        query: ListPromotionsQuery,
    ) -> ApplicationResult<CursorPage<PromotionDto>> {
        let limit = paging::normalize_limit(query.limit);
        let cursor = paging::decode_cursor(query.cursor.as_deref())?;

        let (records, next_cursor) = self.read_repo.list_page(limit, cursor).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
