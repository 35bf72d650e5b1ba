// src/infrastructure/repositories/postgres_promotion.rs
use super::map_sqlx;
use crate::domain::artist::{ArtistId, ArtistName, ArtistSlug, ArtistSummary};
use crate::domain::cursor::ListCursor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::manager::{ManagerId, ManagerSummary};
use crate::domain::promotion::{
    Amount, BoostCount, NewPromotion, Promotion, PromotionDetails, PromotionFields, PromotionId,
    PromotionReadRepository, PromotionUpdate, PromotionWriteRepository, TransactionId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PROMOTION_COLUMNS: &str = "id, artist_id, manager_id, track_title, intermediary_name, \
     intermediary_contact, intermediary_channel, package_tier, boost_count, amount_paid, \
     payment_method, receiver_number, transaction_id, status, created_at, updated_at";

const DETAILS_SELECT: &str = "SELECT p.id, p.artist_id, p.manager_id, p.track_title, \
     p.intermediary_name, p.intermediary_contact, p.intermediary_channel, p.package_tier, \
     p.boost_count, p.amount_paid, p.payment_method, p.receiver_number, p.transaction_id, \
     p.status, p.created_at, p.updated_at, \
     a.name AS artist_name, a.slug AS artist_slug, u.name AS manager_name \
     FROM promotions p \
     JOIN artists a ON a.id = p.artist_id \
     JOIN users u ON u.id = p.manager_id";

#[derive(Clone)]
pub struct PostgresPromotionWriteRepository {
    pool: PgPool,
}

impl PostgresPromotionWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPromotionReadRepository {
    pool: PgPool,
}

impl PostgresPromotionReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PromotionRow {
    id: i64,
    artist_id: i64,
    manager_id: i64,
    track_title: String,
    intermediary_name: Option<String>,
    intermediary_contact: String,
    intermediary_channel: String,
    package_tier: String,
    boost_count: i32,
    amount_paid: Decimal,
    payment_method: String,
    receiver_number: String,
    transaction_id: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PromotionRow> for Promotion {
    type Error = DomainError;

    fn try_from(row: PromotionRow) -> Result<Self, Self::Error> {
        Ok(Promotion {
            id: PromotionId::new(row.id)?,
            fields: PromotionFields {
                artist_id: ArtistId::new(row.artist_id)?,
                manager_id: ManagerId::new(row.manager_id)?,
                track_title: row.track_title,
                intermediary_name: row.intermediary_name,
                intermediary_contact: row.intermediary_contact,
                intermediary_channel: row.intermediary_channel,
                package_tier: row.package_tier,
                boost_count: BoostCount::new(i64::from(row.boost_count))?,
                amount_paid: Amount::new(row.amount_paid)?,
                payment_method: row.payment_method,
                receiver_number: row.receiver_number,
                transaction_id: row.transaction_id.map(TransactionId::new).transpose()?,
                status: row.status.parse()?,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PromotionDetailsRow {
    #[sqlx(flatten)]
    promotion: PromotionRow,
    artist_name: String,
    artist_slug: String,
    manager_name: String,
}

impl TryFrom<PromotionDetailsRow> for PromotionDetails {
    type Error = DomainError;

    fn try_from(row: PromotionDetailsRow) -> Result<Self, Self::Error> {
        let promotion = Promotion::try_from(row.promotion)?;
        let artist = ArtistSummary {
            id: promotion.fields.artist_id,
            name: ArtistName::new(row.artist_name)?,
            slug: ArtistSlug::new(row.artist_slug)?,
        };
        let manager = ManagerSummary {
            id: promotion.fields.manager_id,
            name: row.manager_name,
        };
        Ok(PromotionDetails {
            promotion,
            artist,
            manager,
        })
    }
}

#[async_trait]
impl PromotionWriteRepository for PostgresPromotionWriteRepository {
    async fn insert(&self, promotion: NewPromotion) -> DomainResult<Promotion> {
        let NewPromotion {
            fields,
            created_at,
            updated_at,
        } = promotion;

        let row = sqlx::query_as::<_, PromotionRow>(&format!(
            "INSERT INTO promotions (artist_id, manager_id, track_title, intermediary_name, \
             intermediary_contact, intermediary_channel, package_tier, boost_count, \
             amount_paid, payment_method, receiver_number, transaction_id, status, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {PROMOTION_COLUMNS}"
        ))
        .bind(i64::from(fields.artist_id))
        .bind(i64::from(fields.manager_id))
        .bind(fields.track_title)
        .bind(fields.intermediary_name)
        .bind(fields.intermediary_contact)
        .bind(fields.intermediary_channel)
        .bind(fields.package_tier)
        .bind(fields.boost_count.value())
        .bind(fields.amount_paid.value())
        .bind(fields.payment_method)
        .bind(fields.receiver_number)
        .bind(fields.transaction_id.map(TransactionId::into_inner))
        .bind(fields.status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Promotion::try_from(row)
    }

    async fn update(&self, update: PromotionUpdate) -> DomainResult<Promotion> {
        let PromotionUpdate {
            id,
            fields,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, PromotionRow>(&format!(
            "UPDATE promotions SET artist_id = $1, manager_id = $2, track_title = $3, \
             intermediary_name = $4, intermediary_contact = $5, intermediary_channel = $6, \
             package_tier = $7, boost_count = $8, amount_paid = $9, payment_method = $10, \
             receiver_number = $11, transaction_id = $12, status = $13, updated_at = $14 \
             WHERE id = $15 RETURNING {PROMOTION_COLUMNS}"
        ))
        .bind(i64::from(fields.artist_id))
        .bind(i64::from(fields.manager_id))
        .bind(fields.track_title)
        .bind(fields.intermediary_name)
        .bind(fields.intermediary_contact)
        .bind(fields.intermediary_channel)
        .bind(fields.package_tier)
        .bind(fields.boost_count.value())
        .bind(fields.amount_paid.value())
        .bind(fields.payment_method)
        .bind(fields.receiver_number)
        .bind(fields.transaction_id.map(TransactionId::into_inner))
        .bind(fields.status.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("promotion not found".into()))?;
        Promotion::try_from(row)
    }

    async fn delete(&self, id: PromotionId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("promotion not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PromotionReadRepository for PostgresPromotionReadRepository {
    async fn find_by_id(&self, id: PromotionId) -> DomainResult<Option<PromotionDetails>> {
        let row = sqlx::query_as::<_, PromotionDetailsRow>(&format!(
            "{DETAILS_SELECT} WHERE p.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PromotionDetails::try_from).transpose()
    }

    async fn transaction_id_exists(
        &self,
        transaction_id: &TransactionId,
        exclude: Option<PromotionId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM promotions WHERE transaction_id = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(transaction_id.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<PromotionDetails>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(DETAILS_SELECT);
        if let Some(cursor) = &cursor {
            builder.push(" WHERE (p.created_at, p.id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY p.created_at DESC, p.id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<PromotionDetailsRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut promotions = rows
            .into_iter()
            .map(PromotionDetails::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if promotions.len() > limit as usize {
            promotions.pop();
            if let Some(last) = promotions.last() {
                next_cursor = Some(ListCursor::new(
                    last.promotion.created_at,
                    i64::from(last.promotion.id),
                ));
            }
        }

        Ok((promotions, next_cursor))
    }
}
