// src/application/commands/artists/delete.rs
use super::ArtistCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::artist::ArtistId,
};

pub struct DeleteArtistCommand {
    pub id: i64,
}

impl ArtistCommandService {
    /// Hard delete. Promotions of the artist go with it.
    pub async fn delete_artist(&self, command: DeleteArtistCommand) -> ApplicationResult<()> {
        let id = ArtistId::new(command.id)?;
        let artist = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("artist not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(artist_id = %id, slug = %artist.slug, "artist deleted");
        Ok(())
    }
}
