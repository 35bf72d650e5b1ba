use super::map_sqlx;
use crate::domain::artist::EmailAddress;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::manager::{Manager, ManagerId, ManagerRepository, NewManager};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresManagerRepository {
    pool: PgPool,
}

impl PostgresManagerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ManagerRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ManagerRow> for Manager {
    type Error = DomainError;

    fn try_from(row: ManagerRow) -> Result<Self, Self::Error> {
        Ok(Manager {
            id: ManagerId::new(row.id)?,
            name: row.name,
            email: EmailAddress::new(row.email)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ManagerRepository for PostgresManagerRepository {
    async fn insert(&self, manager: NewManager) -> DomainResult<Manager> {
        let row = sqlx::query_as::<_, ManagerRow>(
            "INSERT INTO users (name, email, created_at) VALUES ($1, $2, $3)
             RETURNING id, name, email, created_at",
        )
        .bind(manager.name)
        .bind(manager.email.into_inner())
        .bind(manager.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Manager::try_from(row)
    }

    async fn find_by_id(&self, id: ManagerId) -> DomainResult<Option<Manager>> {
        let row = sqlx::query_as::<_, ManagerRow>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Manager::try_from).transpose()
    }

    async fn email_exists(&self, email: &EmailAddress) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(&self) -> DomainResult<Vec<Manager>> {
        let rows = sqlx::query_as::<_, ManagerRow>(
            "SELECT id, name, email, created_at FROM users ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Manager::try_from).collect()
    }
}
