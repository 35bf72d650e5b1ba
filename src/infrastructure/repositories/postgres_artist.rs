// src/infrastructure/repositories/postgres_artist.rs
use super::map_sqlx;
use crate::domain::artist::{
    Artist, ArtistId, ArtistName, ArtistProfile, ArtistReadRepository, ArtistSlug, ArtistSummary,
    ArtistUpdate, ArtistWriteRepository, EmailAddress, NewArtist,
};
use crate::domain::cursor::ListCursor;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTIST_COLUMNS: &str = "id, name, slug, profile_photo, cover_photo, real_name, birthdate, birthplace, \
     biography, description, keywords, email, phone, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArtistWriteRepository {
    pool: PgPool,
}

impl PostgresArtistWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArtistReadRepository {
    pool: PgPool,
}

impl PostgresArtistReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    slug: String,
    profile_photo: Option<String>,
    cover_photo: Option<String>,
    real_name: Option<String>,
    birthdate: Option<NaiveDate>,
    birthplace: Option<String>,
    biography: Option<String>,
    description: Option<String>,
    keywords: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArtistRow> for Artist {
    type Error = DomainError;

    fn try_from(row: ArtistRow) -> Result<Self, Self::Error> {
        Ok(Artist {
            id: ArtistId::new(row.id)?,
            name: ArtistName::new(row.name)?,
            slug: ArtistSlug::new(row.slug)?,
            profile: ArtistProfile {
                profile_photo: row.profile_photo,
                cover_photo: row.cover_photo,
                real_name: row.real_name,
                birthdate: row.birthdate,
                birthplace: row.birthplace,
                biography: row.biography,
                description: row.description,
                keywords: row.keywords,
                email: row.email.map(EmailAddress::new).transpose()?,
                phone: row.phone,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArtistSummaryRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<ArtistSummaryRow> for ArtistSummary {
    type Error = DomainError;

    fn try_from(row: ArtistSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArtistSummary {
            id: ArtistId::new(row.id)?,
            name: ArtistName::new(row.name)?,
            slug: ArtistSlug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl ArtistWriteRepository for PostgresArtistWriteRepository {
    async fn insert(&self, artist: NewArtist) -> DomainResult<Artist> {
        let NewArtist {
            name,
            slug,
            profile,
            created_at,
            updated_at,
        } = artist;

        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "INSERT INTO artists (name, slug, profile_photo, cover_photo, real_name, birthdate, \
             birthplace, biography, description, keywords, email, phone, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {ARTIST_COLUMNS}"
        ))
        .bind(name.into_inner())
        .bind(slug.into_inner())
        .bind(profile.profile_photo)
        .bind(profile.cover_photo)
        .bind(profile.real_name)
        .bind(profile.birthdate)
        .bind(profile.birthplace)
        .bind(profile.biography)
        .bind(profile.description)
        .bind(profile.keywords)
        .bind(profile.email.map(EmailAddress::into_inner))
        .bind(profile.phone)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Artist::try_from(row)
    }

    async fn update(&self, update: ArtistUpdate) -> DomainResult<Artist> {
        let ArtistUpdate {
            id,
            name,
            slug,
            profile,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "UPDATE artists SET name = $1, slug = $2, profile_photo = $3, cover_photo = $4, \
             real_name = $5, birthdate = $6, birthplace = $7, biography = $8, description = $9, \
             keywords = $10, email = $11, phone = $12, updated_at = $13 \
             WHERE id = $14 RETURNING {ARTIST_COLUMNS}"
        ))
        .bind(name.into_inner())
        .bind(slug.into_inner())
        .bind(profile.profile_photo)
        .bind(profile.cover_photo)
        .bind(profile.real_name)
        .bind(profile.birthdate)
        .bind(profile.birthplace)
        .bind(profile.biography)
        .bind(profile.description)
        .bind(profile.keywords)
        .bind(profile.email.map(EmailAddress::into_inner))
        .bind(profile.phone)
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("artist not found".into()))?;
        Artist::try_from(row)
    }

    async fn delete(&self, id: ArtistId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("artist not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArtistReadRepository for PostgresArtistReadRepository {
    async fn find_by_id(&self, id: ArtistId) -> DomainResult<Option<Artist>> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Artist::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArtistSlug) -> DomainResult<Option<Artist>> {
        let row = sqlx::query_as::<_, ArtistRow>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Artist::try_from).transpose()
    }

    async fn slug_exists(
        &self,
        slug: &ArtistSlug,
        exclude: Option<ArtistId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM artists WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(slug.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn name_exists(
        &self,
        name: &ArtistName,
        exclude: Option<ArtistId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM artists WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(name.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Artist>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTIST_COLUMNS);
        builder.push(" FROM artists");
        if let Some(cursor) = &cursor {
            builder.push(" WHERE (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArtistRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut artists = rows
            .into_iter()
            .map(Artist::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if artists.len() > limit as usize {
            artists.pop();
            if let Some(last) = artists.last() {
                next_cursor = Some(ListCursor::new(last.created_at, i64::from(last.id)));
            }
        }

        Ok((artists, next_cursor))
    }

    async fn list_summaries(&self) -> DomainResult<Vec<ArtistSummary>> {
        let rows = sqlx::query_as::<_, ArtistSummaryRow>(
            "SELECT id, name, slug FROM artists ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArtistSummary::try_from).collect()
    }
}
