use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fields::{self, MAX_SHORT_TEXT};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtistId(pub i64);

impl ArtistId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("artist id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArtistId> for i64 {
    fn from(value: ArtistId) -> Self {
        value.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stage name. Unique across artists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistName(String);

impl ArtistName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        fields::required_text("name", value, MAX_SHORT_TEXT).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArtistName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArtistName> for String {
    fn from(value: ArtistName) -> Self {
        value.0
    }
}

/// URL identifier of an artist. Derived slugs are always lowercase
/// `[a-z0-9]` words joined by single hyphens; explicitly supplied slugs are
/// stored as given, so the only invariant enforced here is non-blank and the
/// column length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtistSlug(String);

impl ArtistSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.chars().count() > MAX_SHORT_TEXT {
            return Err(DomainError::Validation(format!(
                "slug must not exceed {MAX_SHORT_TEXT} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArtistSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArtistSlug> for String {
    fn from(value: ArtistSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        fields::email("email", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
