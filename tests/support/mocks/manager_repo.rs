// tests/support/mocks/manager_repo.rs
use async_trait::async_trait;
use promo_desk::domain::artist::EmailAddress;
use promo_desk::domain::errors::{DomainError, DomainResult};
use promo_desk::domain::manager::{Manager, ManagerId, ManagerRepository, NewManager};

use super::store::SharedState;

pub struct InMemoryManagers {
    state: SharedState,
}

impl InMemoryManagers {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ManagerRepository for InMemoryManagers {
    async fn insert(&self, manager: NewManager) -> DomainResult<Manager> {
        let mut state = self.state.lock().unwrap();
        if state.managers.values().any(|m| m.email == manager.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }
        let id = ManagerId::new(state.next_id())?;
        let created = Manager {
            id,
            name: manager.name,
            email: manager.email,
            created_at: manager.created_at,
        };
        state.managers.insert(id.into(), created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: ManagerId) -> DomainResult<Option<Manager>> {
        Ok(self.state.lock().unwrap().managers.get(&i64::from(id)).cloned())
    }

    async fn email_exists(&self, email: &EmailAddress) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.managers.values().any(|m| m.email == *email))
    }

    async fn list(&self) -> DomainResult<Vec<Manager>> {
        let mut managers: Vec<Manager> =
            self.state.lock().unwrap().managers.values().cloned().collect();
        managers.sort_by(|a, b| a.name.cmp(&b.name).then(i64::from(a.id).cmp(&i64::from(b.id))));
        Ok(managers)
    }
}
