use super::{ArtistCommandService, service::explicit_slug};
use crate::{
    application::{
        dto::ArtistDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::artist::{ArtistId, ArtistName, ArtistProfile, ArtistProfileInput, ArtistUpdate},
};

pub struct UpdateArtistCommand {
    pub id: i64,
    pub name: String,
    pub slug: Option<String>,
    pub profile: ArtistProfileInput,
}

impl ArtistCommandService {
    /// Replaces the artist's editable fields. The slug is re-derived only when
    /// the name changed and no slug was submitted; a submitted slug is stored
    /// as given, and an unchanged name keeps the stored slug.
    pub async fn update_artist(&self, command: UpdateArtistCommand) -> ApplicationResult<ArtistDto> {
        let id = ArtistId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("artist not found"))?;

        let name = ArtistName::new(command.name)?;
        let profile = ArtistProfile::parse(command.profile)?;
        self.ensure_unique_name(&name, Some(id)).await?;

        let explicit = explicit_slug(command.slug.as_deref());
        let slug = if explicit.is_some() || existing.is_renamed_to(&name) {
            self.resolve_slug(&name, explicit, Some(id)).await?
        } else {
            existing.slug.clone()
        };

        if slug != existing.slug {
            tracing::debug!(artist_id = %id, from = %existing.slug, to = %slug, "artist slug changed");
        }

        let update = ArtistUpdate {
            id,
            name,
            slug,
            profile,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(artist_id = %updated.id, slug = %updated.slug, "artist updated");
        Ok(updated.into())
    }
}
