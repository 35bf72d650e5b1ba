use super::{ArtistSummaryDto, ManagerSummaryDto};
use crate::domain::promotion::{PromotionDetails, PromotionStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromotionDto {
    pub id: i64,
    pub artist_id: i64,
    pub artist: ArtistSummaryDto,
    pub track_title: String,
    pub intermediary_name: Option<String>,
    pub intermediary_contact: String,
    pub intermediary_channel: String,
    pub package_tier: String,
    pub boost_count: i32,
    /// Decimal string with two places, e.g. `"1500.00"`.
    pub amount_paid: String,
    pub payment_method: String,
    pub receiver_number: String,
    pub transaction_id: Option<String>,
    pub manager_id: i64,
    pub manager: ManagerSummaryDto,
    #[schema(value_type = String, example = "PENDING")]
    pub status: PromotionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PromotionDetails> for PromotionDto {
    fn from(details: PromotionDetails) -> Self {
        let PromotionDetails {
            promotion,
            artist,
            manager,
        } = details;
        let fields = promotion.fields;
        Self {
            id: promotion.id.into(),
            artist_id: fields.artist_id.into(),
            artist: artist.into(),
            track_title: fields.track_title,
            intermediary_name: fields.intermediary_name,
            intermediary_contact: fields.intermediary_contact,
            intermediary_channel: fields.intermediary_channel,
            package_tier: fields.package_tier,
            boost_count: fields.boost_count.value(),
            amount_paid: fields.amount_paid.to_string(),
            payment_method: fields.payment_method,
            receiver_number: fields.receiver_number,
            transaction_id: fields.transaction_id.map(|id| id.into_inner()),
            manager_id: fields.manager_id.into(),
            manager: manager.into(),
            status: fields.status,
            created_at: promotion.created_at,
            updated_at: promotion.updated_at,
        }
    }
}
