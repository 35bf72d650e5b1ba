// tests/slug_assignment.rs
use std::sync::Arc;

use promo_desk::application::ports::util::SlugGenerator;
use promo_desk::domain::artist::services::ArtistSlugService;
use promo_desk::domain::artist::{ArtistId, ArtistName};
use promo_desk::domain::errors::DomainError;
use promo_desk::infrastructure::util::DefaultSlugGenerator;

mod support;

use support::{ArtistBuilder, IdentitySlug, InMemoryArtists, store::shared_state};

fn store_with(slugs: &[&str]) -> Arc<InMemoryArtists> {
    let artists = Arc::new(InMemoryArtists::new(shared_state()));
    for (i, slug) in slugs.iter().enumerate() {
        artists.seed(ArtistBuilder::new(format!("Seed {i}"), *slug).build());
    }
    artists
}

fn service(artists: &Arc<InMemoryArtists>, generator: Arc<dyn SlugGenerator>) -> ArtistSlugService {
    ArtistSlugService::new(artists.clone(), generator)
}

fn name(value: &str) -> ArtistName {
    ArtistName::new(value).unwrap()
}

#[tokio::test]
async fn free_base_is_returned_without_suffix() {
    let artists = store_with(&[]);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("DJ Lova"), None, None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "dj-lova");
    assert_eq!(artists.slug_lookups(), 1);
}

#[tokio::test]
async fn collisions_take_the_lowest_free_counter() {
    let artists = store_with(&["dj-lova", "dj-lova-1"]);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("DJ Lova"), None, None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "dj-lova-2");
    assert_eq!(artists.slug_lookups(), 3);
}

#[tokio::test]
async fn gaps_in_the_sequence_are_reused() {
    let artists = store_with(&["dj-lova", "dj-lova-2", "dj-lova-3"]);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("DJ Lova"), None, None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "dj-lova-1");
}

#[tokio::test]
async fn explicit_slug_is_returned_verbatim_without_lookups() {
    let artists = store_with(&["taken"]);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("Whatever"), Some("taken"), None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "taken");
    assert_eq!(artists.slug_lookups(), 0);
}

#[tokio::test]
async fn whitespace_explicit_slug_is_treated_as_absent() {
    let artists = store_with(&[]);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("Électrik!"), Some("   "), None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "electrik");
}

#[tokio::test]
async fn excluded_artist_does_not_collide_with_itself() {
    let artists = store_with(&[]);
    let own = artists.seed(ArtistBuilder::new("DJ Lova", "dj-lova").build());
    let svc = service(&artists, Arc::new(DefaultSlugGenerator));

    let for_self = svc
        .assign_slug(&name("Dj Lova"), None, Some(own.id))
        .await
        .unwrap();
    assert_eq!(for_self.as_str(), "dj-lova");

    let for_other = svc
        .assign_slug(&name("Dj Lova"), None, Some(ArtistId(own.id.0 + 100)))
        .await
        .unwrap();
    assert_eq!(for_other.as_str(), "dj-lova-1");
}

#[tokio::test]
async fn omitting_the_exclusion_suffixes_the_own_slug() {
    let artists = store_with(&[]);
    artists.seed(ArtistBuilder::new("DJ Lova", "dj-lova").build());

    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("Dj Lova"), None, None)
        .await
        .unwrap();
    assert_eq!(slug.as_str(), "dj-lova-1");
}

#[tokio::test]
async fn same_inputs_yield_same_slug() {
    let artists = store_with(&["dj-lova", "dj-lova-1"]);
    let svc = service(&artists, Arc::new(DefaultSlugGenerator));

    let first = svc.assign_slug(&name("DJ Lova"), None, None).await.unwrap();
    let lookups_after_first = artists.slug_lookups();
    let second = svc.assign_slug(&name("DJ Lova"), None, None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.as_str(), "dj-lova-2");
    assert_eq!(artists.slug_lookups(), lookups_after_first * 2);
    assert_eq!(artists.all().len(), 2);
}

#[tokio::test]
async fn name_without_slug_characters_uses_fallback_base() {
    let artists = store_with(&["artist"]);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("!!!"), None, None)
        .await
        .unwrap();

    assert_eq!(slug.as_str(), "artist-1");
}

#[tokio::test]
async fn exhausted_counters_fall_back_to_random_suffix() {
    let artists = store_with(&["mc", "mc-1", "mc-2", "mc-3"]);
    let slug = service(&artists, Arc::new(IdentitySlug))
        .with_max_numeric_suffix(3)
        .assign_slug(&name("mc"), None, None)
        .await
        .unwrap();

    let suffix = slug
        .as_str()
        .strip_prefix("mc-")
        .expect("random slug keeps the base");
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    // base + three counters + one random candidate
    assert_eq!(artists.slug_lookups(), 5);
}

#[tokio::test]
async fn assigned_slug_is_not_in_use() {
    let taken = ["tahiry", "tahiry-1", "tahiry-2", "tahiry-4"];
    let artists = store_with(&taken);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name("Tahiry"), None, None)
        .await
        .unwrap();

    assert!(!taken.contains(&slug.as_str()));
    assert_eq!(slug.as_str(), "tahiry-3");
}

#[tokio::test]
async fn very_long_names_still_fit_the_slug_column() {
    let artists = store_with(&[]);
    let long = "a".repeat(255);
    let slug = service(&artists, Arc::new(DefaultSlugGenerator))
        .assign_slug(&name(&long), None, None)
        .await
        .unwrap();

    assert!(slug.as_str().len() <= 255 - 9);
}

struct FailingLookups;

#[async_trait::async_trait]
impl promo_desk::domain::artist::ArtistReadRepository for FailingLookups {
    async fn find_by_id(
        &self,
        _id: ArtistId,
    ) -> promo_desk::domain::errors::DomainResult<Option<promo_desk::domain::artist::Artist>> {
        Ok(None)
    }

    async fn find_by_slug(
        &self,
        _slug: &promo_desk::domain::artist::ArtistSlug,
    ) -> promo_desk::domain::errors::DomainResult<Option<promo_desk::domain::artist::Artist>> {
        Ok(None)
    }

    async fn slug_exists(
        &self,
        _slug: &promo_desk::domain::artist::ArtistSlug,
        _exclude: Option<ArtistId>,
    ) -> promo_desk::domain::errors::DomainResult<bool> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn name_exists(
        &self,
        _name: &ArtistName,
        _exclude: Option<ArtistId>,
    ) -> promo_desk::domain::errors::DomainResult<bool> {
        Ok(false)
    }

    async fn list_page(
        &self,
        _limit: u32,
        _cursor: Option<promo_desk::domain::cursor::ListCursor>,
    ) -> promo_desk::domain::errors::DomainResult<(
        Vec<promo_desk::domain::artist::Artist>,
        Option<promo_desk::domain::cursor::ListCursor>,
    )> {
        Ok((vec![], None))
    }

    async fn list_summaries(
        &self,
    ) -> promo_desk::domain::errors::DomainResult<Vec<promo_desk::domain::artist::ArtistSummary>>
    {
        Ok(vec![])
    }
}

#[tokio::test]
async fn lookup_failures_propagate() {
    let svc = ArtistSlugService::new(Arc::new(FailingLookups), Arc::new(DefaultSlugGenerator));
    let err = svc
        .assign_slug(&name("DJ Lova"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Persistence(_)));
}
