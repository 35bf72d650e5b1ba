use crate::domain::manager::{Manager, ManagerSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManagerDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Manager> for ManagerDto {
    fn from(manager: Manager) -> Self {
        Self {
            id: manager.id.into(),
            name: manager.name,
            email: manager.email.into_inner(),
            created_at: manager.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ManagerSummaryDto {
    pub id: i64,
    pub name: String,
}

impl From<ManagerSummary> for ManagerSummaryDto {
    fn from(summary: ManagerSummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name,
        }
    }
}
