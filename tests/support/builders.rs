// tests/support/builders.rs
use promo_desk::domain::artist::{Artist, ArtistId, ArtistName, ArtistProfile, ArtistSlug};
use promo_desk::domain::promotion::PromotionInput;
use rust_decimal::Decimal;
use serde_json::{Value, json};

use super::mocks::fixed_now;

/// Artist row for seeding repositories directly. Id 0 means "assign one".
pub struct ArtistBuilder {
    id: i64,
    name: String,
    slug: String,
}

impl ArtistBuilder {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            slug: slug.into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> Artist {
        Artist {
            id: ArtistId(self.id),
            name: ArtistName::new(self.name).unwrap(),
            slug: ArtistSlug::new(self.slug).unwrap(),
            profile: ArtistProfile::default(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

/// A valid promotion form pointing at the given artist and manager.
pub fn promotion_input(artist_id: i64, manager_id: i64) -> PromotionInput {
    PromotionInput {
        artist_id,
        manager_id,
        track_title: "Tsy Miala".into(),
        intermediary_name: Some("Faly".into()),
        intermediary_contact: "+261 34 00 000 00".into(),
        intermediary_channel: "WhatsApp".into(),
        package_tier: "Premium".into(),
        boost_count: Some(3),
        amount_paid: Some(Decimal::from(150_000)),
        payment_method: "Mvola".into(),
        receiver_number: "034 11 222 33".into(),
        transaction_id: None,
        status: "PENDING".into(),
    }
}

/// JSON body equivalent of [`promotion_input`].
pub fn promotion_body(artist_id: i64, manager_id: i64) -> Value {
    json!({
        "artist_id": artist_id,
        "manager_id": manager_id,
        "track_title": "Tsy Miala",
        "intermediary_name": "Faly",
        "intermediary_contact": "+261 34 00 000 00",
        "intermediary_channel": "WhatsApp",
        "package_tier": "Premium",
        "boost_count": 3,
        "amount_paid": 150000,
        "payment_method": "Mvola",
        "receiver_number": "034 11 222 33",
        "status": "PENDING"
    })
}
