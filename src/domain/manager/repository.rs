use crate::domain::artist::EmailAddress;
use crate::domain::errors::DomainResult;
use crate::domain::manager::entity::{Manager, ManagerId, NewManager};
use async_trait::async_trait;

#[async_trait]
pub trait ManagerRepository: Send + Sync {
    async fn insert(&self, manager: NewManager) -> DomainResult<Manager>;
    async fn find_by_id(&self, id: ManagerId) -> DomainResult<Option<Manager>>;
    async fn email_exists(&self, email: &EmailAddress) -> DomainResult<bool>;
    /// All managers ordered by name.
    async fn list(&self) -> DomainResult<Vec<Manager>>;
}
