// src/domain/promotion/entity.rs
use crate::domain::artist::{ArtistId, ArtistSummary};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fields::{self, MAX_SHORT_TEXT};
use crate::domain::manager::{ManagerId, ManagerSummary};
use crate::domain::promotion::value_objects::{
    Amount, BoostCount, PromotionId, PromotionStatus, TransactionId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Everything an administrator fills in for a promotion, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromotionFields {
    pub artist_id: ArtistId,
    pub manager_id: ManagerId,
    pub track_title: String,
    pub intermediary_name: Option<String>,
    pub intermediary_contact: String,
    pub intermediary_channel: String,
    pub package_tier: String,
    pub boost_count: BoostCount,
    pub amount_paid: Amount,
    pub payment_method: String,
    pub receiver_number: String,
    pub transaction_id: Option<TransactionId>,
    pub status: PromotionStatus,
}

/// Raw promotion form values.
#[derive(Debug, Clone, Default)]
pub struct PromotionInput {
    pub artist_id: i64,
    pub manager_id: i64,
    pub track_title: String,
    pub intermediary_name: Option<String>,
    pub intermediary_contact: String,
    pub intermediary_channel: String,
    pub package_tier: String,
    pub boost_count: Option<i64>,
    pub amount_paid: Option<Decimal>,
    pub payment_method: String,
    pub receiver_number: String,
    pub transaction_id: Option<String>,
    pub status: String,
}

impl PromotionFields {
    pub fn parse(input: PromotionInput) -> DomainResult<Self> {
        let short = MAX_SHORT_TEXT;
        let transaction_id = fields::optional_text("transaction_id", input.transaction_id, Some(short))?
            .map(TransactionId::new)
            .transpose()?;

        Ok(Self {
            artist_id: ArtistId::new(input.artist_id)?,
            manager_id: ManagerId::new(input.manager_id)?,
            track_title: fields::required_text("track_title", input.track_title, short)?,
            intermediary_name: fields::optional_text(
                "intermediary_name",
                input.intermediary_name,
                Some(short),
            )?,
            intermediary_contact: fields::required_text(
                "intermediary_contact",
                input.intermediary_contact,
                short,
            )?,
            intermediary_channel: fields::required_text(
                "intermediary_channel",
                input.intermediary_channel,
                short,
            )?,
            package_tier: fields::required_text("package_tier", input.package_tier, short)?,
            boost_count: input
                .boost_count
                .map(BoostCount::new)
                .transpose()?
                .unwrap_or_default(),
            amount_paid: input
                .amount_paid
                .ok_or_else(|| DomainError::Validation("amount_paid is required".into()))
                .and_then(Amount::new)?,
            payment_method: fields::required_text("payment_method", input.payment_method, short)?,
            receiver_number: fields::required_text("receiver_number", input.receiver_number, short)?,
            transaction_id,
            status: input.status.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Promotion {
    pub id: PromotionId,
    pub fields: PromotionFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A promotion together with the artist and manager it points at.
#[derive(Debug, Clone)]
pub struct PromotionDetails {
    pub promotion: Promotion,
    pub artist: ArtistSummary,
    pub manager: ManagerSummary,
}

#[derive(Debug, Clone)]
pub struct NewPromotion {
    pub fields: PromotionFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PromotionUpdate {
    pub id: PromotionId,
    pub fields: PromotionFields,
    pub updated_at: DateTime<Utc>,
}
