// src/application/commands/artists/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::artist::{
        ArtistId, ArtistName, ArtistReadRepository, ArtistSlug, ArtistWriteRepository,
        services::ArtistSlugService,
    },
};

pub struct ArtistCommandService {
    pub(super) write_repo: Arc<dyn ArtistWriteRepository>,
    pub(super) read_repo: Arc<dyn ArtistReadRepository>,
    pub(super) slug_service: Arc<ArtistSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArtistCommandService {
    pub fn new(
        write_repo: Arc<dyn ArtistWriteRepository>,
        read_repo: Arc<dyn ArtistReadRepository>,
        slug_service: Arc<ArtistSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    pub(super) async fn ensure_unique_name(
        &self,
        name: &ArtistName,
        exclude: Option<ArtistId>,
    ) -> ApplicationResult<()> {
        if self.read_repo.name_exists(name, exclude).await? {
            return Err(ApplicationError::conflict("artist name already exists"));
        }
        Ok(())
    }

    /// Form-level check on an explicitly submitted slug, then slug assignment.
    /// The assigner itself never checks an explicit slug.
    pub(super) async fn resolve_slug(
        &self,
        name: &ArtistName,
        explicit: Option<&str>,
        exclude: Option<ArtistId>,
    ) -> ApplicationResult<ArtistSlug> {
        if let Some(explicit) = explicit {
            let candidate = ArtistSlug::new(explicit)?;
            if self.read_repo.slug_exists(&candidate, exclude).await? {
                return Err(ApplicationError::conflict("artist slug already exists"));
            }
        }

        let slug = self.slug_service.assign_slug(name, explicit, exclude).await?;
        Ok(slug)
    }
}

/// Trimmed explicit slug, or `None` when the form left it blank.
pub(super) fn explicit_slug(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
