use super::ArtistQueryService;
use crate::application::{
    dto::{ArtistDto, CursorPage},
    error::ApplicationResult,
    queries::paging,
};

pub struct ListArtistsQuery {
    pub limit: u32,
    pub cursor: Option<String>,
}

impl ArtistQueryService {
    /// Newest artists first.
    pub async fn list_artists(
        &self,
        query: ListArtistsQuery,
    ) -> ApplicationResult<CursorPage<ArtistDto>> {
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
