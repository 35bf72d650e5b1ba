use crate::domain::artist::{Artist, ArtistSummary};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub real_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub biography: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Artist> for ArtistDto {
    fn from(artist: Artist) -> Self {
        let profile = artist.profile;
        Self {
            id: artist.id.into(),
            name: artist.name.into_inner(),
            slug: artist.slug.into_inner(),
            profile_photo: profile.profile_photo,
            cover_photo: profile.cover_photo,
            real_name: profile.real_name,
            birthdate: profile.birthdate,
            birthplace: profile.birthplace,
            biography: profile.biography,
            description: profile.description,
            keywords: profile.keywords,
            email: profile.email.map(|email| email.into_inner()),
            phone: profile.phone,
            created_at: artist.created_at,
            updated_at: artist.updated_at,
        }
    }
}

/// Artist reference used by selection lists and promotion listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistSummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<ArtistSummary> for ArtistSummaryDto {
    fn from(summary: ArtistSummary) -> Self {
        Self {
            id: summary.id.into(),
            name: summary.name.into_inner(),
            slug: summary.slug.into_inner(),
        }
    }
}
