// src/domain/artist/services/mod.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::util::SlugGenerator;
use crate::domain::artist::repository::ArtistReadRepository;
use crate::domain::artist::value_objects::{ArtistId, ArtistName, ArtistSlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fields::MAX_SHORT_TEXT;

pub const DEFAULT_MAX_NUMERIC_SUFFIX: u32 = 1000;

/// Base used when a name has no slug-worthy characters at all.
const FALLBACK_BASE: &str = "artist";
const RANDOM_SUFFIX_LEN: usize = 8;
const RANDOM_SUFFIX_ATTEMPTS: u32 = 8;

/// Domain service responsible for producing unique slugs for artists.
///
/// Collisions are resolved by appending `-1`, `-2`, … to the normalized name.
/// The numeric search stops after `max_numeric_suffix` candidates and falls
/// back to a random hexadecimal suffix. Uniqueness is checked with read-only
/// queries; the storage unique constraint remains the final arbiter.
pub struct ArtistSlugService {
    read_repo: Arc<dyn ArtistReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    max_numeric_suffix: u32,
}

impl ArtistSlugService {
    pub fn new(read_repo: Arc<dyn ArtistReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
            max_numeric_suffix: DEFAULT_MAX_NUMERIC_SUFFIX,
        }
    }

    #[must_use]
    pub fn with_max_numeric_suffix(mut self, max_numeric_suffix: u32) -> Self {
        self.max_numeric_suffix = max_numeric_suffix;
        self
    }

    /// Returns `explicit` untouched when it is non-blank, otherwise derives a
    /// unique slug from `name`. `exclude` is the artist being updated, so it
    /// never collides with its own slug.
    pub async fn assign_slug(
        &self,
        name: &ArtistName,
        explicit: Option<&str>,
        exclude: Option<ArtistId>,
    ) -> DomainResult<ArtistSlug> {
        if let Some(explicit) = explicit.filter(|value| !value.trim().is_empty()) {
            return ArtistSlug::new(explicit);
        }
        self.generate_unique_slug(name, exclude).await
    }

    pub async fn generate_unique_slug(
        &self,
        name: &ArtistName,
        exclude: Option<ArtistId>,
    ) -> DomainResult<ArtistSlug> {
        let base = self.base_slug(name);

        let candidate = ArtistSlug::new(base.clone())?;
        if !self.read_repo.slug_exists(&candidate, exclude).await? {
            return Ok(candidate);
        }

        for counter in 1..=self.max_numeric_suffix {
            let candidate = ArtistSlug::new(format!("{base}-{counter}"))?;
            if !self.read_repo.slug_exists(&candidate, exclude).await? {
                tracing::debug!(slug = %candidate, "resolved slug collision with numeric suffix");
                return Ok(candidate);
            }
        }

        tracing::warn!(
            base = %base,
            limit = self.max_numeric_suffix,
            "numeric slug suffixes exhausted, falling back to random suffix"
        );

        for _ in 0..RANDOM_SUFFIX_ATTEMPTS {
            let candidate = ArtistSlug::new(format!("{base}-{}", random_suffix()))?;
            if !self.read_repo.slug_exists(&candidate, exclude).await? {
                return Ok(candidate);
            }
        }

        Err(DomainError::Conflict(format!(
            "unable to find a free slug for {base}"
        )))
    }

    /// Longest base that still fits the slug column once `-` and the widest
    /// possible suffix (random or numeric up to the cap) are appended.
    fn max_base_len(&self) -> usize {
        let counter_width = self
            .max_numeric_suffix
            .checked_ilog10()
            .map_or(1, |digits| digits as usize + 1);
        MAX_SHORT_TEXT - 1 - counter_width.max(RANDOM_SUFFIX_LEN)
    }

    fn base_slug(&self, name: &ArtistName) -> String {
        let mut base = self.generator.slugify(name.as_str());
        let max_len = self.max_base_len();
        if base.len() > max_len {
            let mut end = max_len;
            while !base.is_char_boundary(end) {
                end -= 1;
            }
            base.truncate(end);
            let trimmed = base.trim_end_matches('-').len();
            base.truncate(trimmed);
        }
        if base.is_empty() {
            FALLBACK_BASE.to_string()
        } else {
            base
        }
    }
}

fn random_suffix() -> String {
    let mut suffix = Uuid::new_v4().simple().to_string();
    suffix.truncate(RANDOM_SUFFIX_LEN);
    suffix
}
