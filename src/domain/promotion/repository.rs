use crate::domain::cursor::ListCursor;
use crate::domain::errors::DomainResult;
use crate::domain::promotion::entity::{NewPromotion, Promotion, PromotionDetails, PromotionUpdate};
use crate::domain::promotion::value_objects::{PromotionId, TransactionId};
use async_trait::async_trait;

#[async_trait]
pub trait PromotionWriteRepository: Send + Sync {
    async fn insert(&self, promotion: NewPromotion) -> DomainResult<Promotion>;
    async fn update(&self, update: PromotionUpdate) -> DomainResult<Promotion>;
    async fn delete(&self, id: PromotionId) -> DomainResult<()>;
}

#[async_trait]
pub trait PromotionReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PromotionId) -> DomainResult<Option<PromotionDetails>>;
    /// Whether any promotion other than `exclude` already carries `transaction_id`.
    async fn transaction_id_exists(
        &self,
        transaction_id: &TransactionId,
        exclude: Option<PromotionId>,
    ) -> DomainResult<bool>;
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<PromotionDetails>, Option<ListCursor>)>;
}
