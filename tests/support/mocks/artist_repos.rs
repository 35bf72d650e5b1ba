// tests/support/mocks/artist_repos.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use promo_desk::domain::artist::{
    Artist, ArtistId, ArtistName, ArtistReadRepository, ArtistSlug, ArtistSummary, ArtistUpdate,
    ArtistWriteRepository, NewArtist,
};
use promo_desk::domain::cursor::ListCursor;
use promo_desk::domain::errors::{DomainError, DomainResult};

use super::store::{SharedState, keyset_page};

/// Artist table held in memory. Enforces the same unique keys as the database.
pub struct InMemoryArtists {
    state: SharedState,
    slug_lookups: AtomicUsize,
}

impl InMemoryArtists {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            slug_lookups: AtomicUsize::new(0),
        }
    }

    /// Number of `slug_exists` calls so far.
    pub fn slug_lookups(&self) -> usize {
        self.slug_lookups.load(Ordering::SeqCst)
    }

    /// Inserts an artist row directly, bypassing the services.
    pub fn seed(&self, mut artist: Artist) -> Artist {
        let mut state = self.state.lock().unwrap();
        if i64::from(artist.id) == 0 {
            artist.id = ArtistId::new(state.next_id()).unwrap();
        }
        state.artists.insert(artist.id.into(), artist.clone());
        artist
    }

    pub fn all(&self) -> Vec<Artist> {
        self.state.lock().unwrap().artists.values().cloned().collect()
    }

    fn check_unique(
        artists: impl Iterator<Item = Artist>,
        name: &ArtistName,
        slug: &ArtistSlug,
        exclude: Option<ArtistId>,
    ) -> DomainResult<()> {
        for other in artists.filter(|a| Some(a.id) != exclude) {
            if other.slug == *slug {
                return Err(DomainError::Conflict("artist slug already exists".into()));
            }
            if other.name == *name {
                return Err(DomainError::Conflict("artist name already exists".into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ArtistWriteRepository for InMemoryArtists {
    async fn insert(&self, artist: NewArtist) -> DomainResult<Artist> {
        let mut state = self.state.lock().unwrap();
        Self::check_unique(
            state.artists.values().cloned(),
            &artist.name,
            &artist.slug,
            None,
        )?;
        let id = ArtistId::new(state.next_id())?;
        let created = Artist {
            id,
            name: artist.name,
            slug: artist.slug,
            profile: artist.profile,
            created_at: artist.created_at,
            updated_at: artist.updated_at,
        };
        state.artists.insert(id.into(), created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArtistUpdate) -> DomainResult<Artist> {
        let mut state = self.state.lock().unwrap();
        Self::check_unique(
            state.artists.values().cloned(),
            &update.name,
            &update.slug,
            Some(update.id),
        )?;
        let existing = state
            .artists
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("artist not found".into()))?;
        existing.name = update.name;
        existing.slug = update.slug;
        existing.profile = update.profile;
        existing.updated_at = update.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: ArtistId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.artists.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("artist not found".into()));
        }
        state.promotions.retain(|_, p| p.fields.artist_id != id);
        Ok(())
    }
}

#[async_trait]
impl ArtistReadRepository for InMemoryArtists {
    async fn find_by_id(&self, id: ArtistId) -> DomainResult<Option<Artist>> {
        Ok(self.state.lock().unwrap().artists.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &ArtistSlug) -> DomainResult<Option<Artist>> {
        let state = self.state.lock().unwrap();
        Ok(state.artists.values().find(|a| a.slug == *slug).cloned())
    }

    async fn slug_exists(
        &self,
        slug: &ArtistSlug,
        exclude: Option<ArtistId>,
    ) -> DomainResult<bool> {
        self.slug_lookups.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        Ok(state
            .artists
            .values()
            .any(|a| a.slug == *slug && Some(a.id) != exclude))
    }

    async fn name_exists(
        &self,
        name: &ArtistName,
        exclude: Option<ArtistId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state
            .artists
            .values()
            .any(|a| a.name == *name && Some(a.id) != exclude))
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Artist>, Option<ListCursor>)> {
        let rows = self.all();
        Ok(keyset_page(
            rows,
            |a| (a.created_at, i64::from(a.id)),
            limit,
            cursor,
        ))
    }

    async fn list_summaries(&self) -> DomainResult<Vec<ArtistSummary>> {
        let mut summaries: Vec<ArtistSummary> = self.all().iter().map(Artist::summary).collect();
        summaries.sort_by(|a, b| {
            a.name
                .as_str()
                .cmp(b.name.as_str())
                .then(i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(summaries)
    }
}
