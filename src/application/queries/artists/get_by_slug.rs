use super::ArtistQueryService;
use crate::{
    application::{
        dto::ArtistDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::artist::ArtistSlug,
};

pub struct GetArtistBySlugQuery {
    pub slug: String,
}

impl ArtistQueryService {
    pub async fn get_artist_by_slug(
        &self,
        query: GetArtistBySlugQuery,
    ) -> ApplicationResult<ArtistDto> {
        let slug = ArtistSlug::new(query.slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("artist not found"))
    }
}
