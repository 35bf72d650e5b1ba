use super::PromotionCommandService;
use crate::{
    application::{
        dto::PromotionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::promotion::{
        PromotionDetails, PromotionFields, PromotionId, PromotionInput, PromotionUpdate,
    },
};

pub struct UpdatePromotionCommand {
    pub id: i64,
    pub fields: PromotionInput,
}

impl PromotionCommandService {
    pub async fn update_promotion(
        &self,
        command: UpdatePromotionCommand,
    ) -> ApplicationResult<PromotionDto> {
        let id = PromotionId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("promotion not found"))?;

        let fields = PromotionFields::parse(command.fields)?;
        let (artist, manager) = self.load_references(&fields).await?;
        self.ensure_unique_transaction(&fields, Some(id)).await?;

        let previous_status = existing.promotion.fields.status;
        let updated = self
            .write_repo
            .update(PromotionUpdate {
                id,
                fields,
                updated_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            promotion_id = %id,
            from = %previous_status,
            to = %updated.fields.status,
            "promotion updated"
        );

        Ok(PromotionDetails {
            promotion: updated,
            artist,
            manager,
        }
        .into())
    }
}
