use std::sync::Arc;

use crate::{
    application::{dto::ManagerSummaryDto, error::ApplicationResult},
    domain::manager::ManagerRepository,
};

pub struct ManagerQueryService {
    repo: Arc<dyn ManagerRepository>,
}

impl ManagerQueryService {
    pub fn new(repo: Arc<dyn ManagerRepository>) -> Self {
        Self { repo }
    }

    /// Managers by name, for the manager picker of the promotion form.
    pub async fn list_managers(&self) -> ApplicationResult<Vec<ManagerSummaryDto>> {
        let managers = self.repo.list().await?;
        Ok(managers
            .into_iter()
            .map(|manager| manager.summary().into())
            .collect())
    }
}
