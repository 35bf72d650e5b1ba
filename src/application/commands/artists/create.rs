// src/application/commands/artists/create.rs
use super::{ArtistCommandService, service::explicit_slug};
use crate::{
    application::{dto::ArtistDto, error::ApplicationResult},
    domain::artist::{ArtistName, ArtistProfile, ArtistProfileInput, NewArtist},
};

pub struct CreateArtistCommand {
    pub name: String,
    pub slug: Option<String>,
    pub profile: ArtistProfileInput,
}

impl ArtistCommandService {
    pub async fn create_artist(&self, command: CreateArtistCommand) -> ApplicationResult<ArtistDto> {
        let name = ArtistName::new(command.name)?;
        let profile = ArtistProfile::parse(command.profile)?;

        self.ensure_unique_name(&name, None).await?;
        let slug = self
            .resolve_slug(&name, explicit_slug(command.slug.as_deref()), None)
            .await?;

        let now = self.clock.now();
        let new_artist = NewArtist {
            name,
            slug,
            profile,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_artist).await?;
        tracing::info!(artist_id = %created.id, slug = %created.slug, "artist created");
        Ok(created.into())
    }
}
