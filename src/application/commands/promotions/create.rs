use super::PromotionCommandService;
use crate::{
    application::{dto::PromotionDto, error::ApplicationResult},
    domain::promotion::{NewPromotion, PromotionDetails, PromotionFields, PromotionInput},
};

pub struct CreatePromotionCommand {
    pub fields: PromotionInput,
}

impl PromotionCommandService {
    pub async fn create_promotion(
        &self,
        command: CreatePromotionCommand,
    ) -> ApplicationResult<PromotionDto> {
        let fields = PromotionFields::parse(command.fields)?;
        let (artist, manager) = self.load_references(&fields).await?;
        self.ensure_unique_transaction(&fields, None).await?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewPromotion {
                fields,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            promotion_id = %created.id,
            artist_id = %artist.id,
            status = %created.fields.status,
            "promotion created"
        );

        Ok(PromotionDetails {
            promotion: created,
            artist,
            manager,
        }
        .into())
    }
}
