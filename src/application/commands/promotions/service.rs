// src/application/commands/promotions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        artist::{ArtistReadRepository, ArtistSummary},
        manager::{ManagerRepository, ManagerSummary},
        promotion::{
            PromotionFields, PromotionId, PromotionReadRepository, PromotionWriteRepository,
        },
    },
};

pub struct PromotionCommandService {
    pub(super) write_repo: Arc<dyn PromotionWriteRepository>,
    pub(super) read_repo: Arc<dyn PromotionReadRepository>,
    pub(super) artist_repo: Arc<dyn ArtistReadRepository>,
    pub(super) manager_repo: Arc<dyn ManagerRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PromotionCommandService {
    pub fn new(
        write_repo: Arc<dyn PromotionWriteRepository>,
        read_repo: Arc<dyn PromotionReadRepository>,
        artist_repo: Arc<dyn ArtistReadRepository>,
        manager_repo: Arc<dyn ManagerRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            artist_repo,
            manager_repo,
            clock,
        }
    }

    /// Resolves the artist and manager a promotion points at. Unknown
    /// references are reported as validation failures of the submitted form.
    pub(super) async fn load_references(
        &self,
        fields: &PromotionFields,
    ) -> ApplicationResult<(ArtistSummary, ManagerSummary)> {
        let artist = self
            .artist_repo
            .find_by_id(fields.artist_id)
            .await?
            .ok_or_else(|| ApplicationError::validation("artist_id does not reference an artist"))?;
        let manager = self
            .manager_repo
            .find_by_id(fields.manager_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::validation("manager_id does not reference a manager")
            })?;
        Ok((artist.summary(), manager.summary()))
    }

    pub(super) async fn ensure_unique_transaction(
        &self,
        fields: &PromotionFields,
        exclude: Option<PromotionId>,
    ) -> ApplicationResult<()> {
        if let Some(transaction_id) = &fields.transaction_id {
            if self
                .read_repo
                .transaction_id_exists(transaction_id, exclude)
                .await?
            {
                return Err(ApplicationError::conflict("transaction_id already recorded"));
            }
        }
        Ok(())
    }
}
