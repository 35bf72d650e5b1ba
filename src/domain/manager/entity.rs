// src/domain/manager/entity.rs
use crate::domain::artist::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fields::{self, MAX_SHORT_TEXT};
use chrono::{DateTime, Utc};
use std::fmt;

/// Identifier of the user account that manages promotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManagerId(pub i64);

impl ManagerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("manager id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ManagerId> for i64 {
    fn from(value: ManagerId) -> Self {
        value.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Manager {
    pub id: ManagerId,
    pub name: String,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}

impl Manager {
    pub fn summary(&self) -> ManagerSummary {
        ManagerSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSummary {
    pub id: ManagerId,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewManager {
    pub name: String,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}

impl NewManager {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            name: fields::required_text("name", name, MAX_SHORT_TEXT)?,
            email: EmailAddress::new(email)?,
            created_at,
        })
    }
}
