use super::ArtistQueryService;
use crate::{
    application::{
        dto::ArtistDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::artist::ArtistId,
};

pub struct GetArtistByIdQuery {
    pub id: i64,
}

impl ArtistQueryService {
    pub async fn get_artist_by_id(&self, query: GetArtistByIdQuery) -> ApplicationResult<ArtistDto> {
        let id = ArtistId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("artist not found"))
    }
}
