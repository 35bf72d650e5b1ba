use crate::domain::artist::entity::{Artist, ArtistSummary, ArtistUpdate, NewArtist};
use crate::domain::artist::value_objects::{ArtistId, ArtistName, ArtistSlug};
use crate::domain::cursor::ListCursor;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArtistWriteRepository: Send + Sync {
    async fn insert(&self, artist: NewArtist) -> DomainResult<Artist>;
    async fn update(&self, update: ArtistUpdate) -> DomainResult<Artist>;
    async fn delete(&self, id: ArtistId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArtistReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArtistId) -> DomainResult<Option<Artist>>;
    async fn find_by_slug(&self, slug: &ArtistSlug) -> DomainResult<Option<Artist>>;
    /// Whether any artist other than `exclude` already uses `slug`.
    async fn slug_exists(&self, slug: &ArtistSlug, exclude: Option<ArtistId>)
    -> DomainResult<bool>;
    /// Whether any artist other than `exclude` already uses `name`.
    async fn name_exists(&self, name: &ArtistName, exclude: Option<ArtistId>)
    -> DomainResult<bool>;
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Artist>, Option<ListCursor>)>;
    /// Every artist as a summary, ordered by name.
    async fn list_summaries(&self) -> DomainResult<Vec<ArtistSummary>>;
}
