// src/application/commands/managers.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::ManagerDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::manager::{ManagerRepository, NewManager},
};

pub struct RegisterManagerCommand {
    pub name: String,
    pub email: String,
}

pub struct ManagerCommandService {
    repo: Arc<dyn ManagerRepository>,
    clock: Arc<dyn Clock>,
}

impl ManagerCommandService {
    pub fn new(repo: Arc<dyn ManagerRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn register_manager(
        &self,
        command: RegisterManagerCommand,
    ) -> ApplicationResult<ManagerDto> {
        let new_manager = NewManager::new(command.name, command.email, self.clock.now())?;
        if self.repo.email_exists(&new_manager.email).await? {
            return Err(ApplicationError::conflict("email already registered"));
        }

        let created = self.repo.insert(new_manager).await?;
        tracing::info!(manager_id = %created.id, "manager registered");
        Ok(created.into())
    }
}
