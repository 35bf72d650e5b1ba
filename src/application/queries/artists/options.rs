use super::ArtistQueryService;
use crate::application::{dto::ArtistSummaryDto, error::ApplicationResult};

impl ArtistQueryService {
    /// Artists by name, for the artist picker of the promotion form.
    pub async fn list_artist_options(&self) -> ApplicationResult<Vec<ArtistSummaryDto>> {
        let summaries = self.read_repo.list_summaries().await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
