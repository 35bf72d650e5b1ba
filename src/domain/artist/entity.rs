// src/domain/artist/entity.rs
use crate::domain::artist::value_objects::{ArtistId, ArtistName, ArtistSlug, EmailAddress};
use crate::domain::errors::DomainResult;
use crate::domain::fields::{self, MAX_SHORT_TEXT};
use chrono::{DateTime, NaiveDate, Utc};

/// Descriptive fields of an artist. None of them take part in any invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistProfile {
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
    pub real_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub biography: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone: Option<String>,
}

/// Unvalidated profile input, as submitted by a form.
#[derive(Debug, Clone, Default)]
pub struct ArtistProfileInput {
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
}

impl ArtistProfile {
    pub fn parse(input: ArtistProfileInput) -> DomainResult<Self> {
        let short = Some(MAX_SHORT_TEXT);
        let email = fields::optional_text("email", input.email, short)?
            .map(EmailAddress::new)
            .transpose()?;

        Ok(Self {
            profile_photo: fields::optional_text("profile_photo", input.profile_photo, short)?,
            cover_photo: fields::optional_text("cover_photo", input.cover_photo, short)?,
            real_name: fields::optional_text("real_name", input.real_name, short)?,
            birthdate: input.birthdate,
            birthplace: fields::optional_text("birthplace", input.birthplace, short)?,
            biography: fields::optional_text("biography", input.biography, None)?,
            description: fields::optional_text("description", input.description, None)?,
            keywords: fields::optional_text("keywords", input.keywords, short)?,
            email,
            phone: fields::optional_text("phone", input.phone, short)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Artist {
    pub id: ArtistId,
    pub name: ArtistName,
    pub slug: ArtistSlug,
    pub profile: ArtistProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artist {
    pub fn is_renamed_to(&self, name: &ArtistName) -> bool {
        self.name != *name
    }

    pub fn summary(&self) -> ArtistSummary {
        ArtistSummary {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// The slice of an artist shown in lookups and next to promotions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: ArtistName,
    pub slug: ArtistSlug,
}

#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: ArtistName,
    pub slug: ArtistSlug,
    pub profile: ArtistProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of an artist's editable state.
#[derive(Debug, Clone)]
pub struct ArtistUpdate {
    pub id: ArtistId,
    pub name: ArtistName,
    pub slug: ArtistSlug,
    pub profile: ArtistProfile,
    pub updated_at: DateTime<Utc>,
}
