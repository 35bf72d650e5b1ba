use super::PromotionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::promotion::PromotionId,
};

pub struct DeletePromotionCommand {
    pub id: i64,
}

impl PromotionCommandService {
    pub async fn delete_promotion(&self, command: DeletePromotionCommand) -> ApplicationResult<()> {
        let id = PromotionId::new(command.id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("promotion not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(promotion_id = %id, "promotion deleted");
        Ok(())
    }
}
