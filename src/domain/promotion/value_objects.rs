use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::fields::{self, MAX_SHORT_TEXT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromotionId(pub i64);

impl PromotionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("promotion id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PromotionId> for i64 {
    fn from(value: PromotionId) -> Self {
        value.0
    }
}

impl fmt::Display for PromotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form campaign status; any value may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromotionStatus {
    #[default]
    Pending,
    Active,
    Done,
}

impl PromotionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionStatus::Pending => "PENDING",
            PromotionStatus::Active => "ACTIVE",
            PromotionStatus::Done => "DONE",
        }
    }
}

impl FromStr for PromotionStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "PENDING" => Ok(PromotionStatus::Pending),
            "ACTIVE" => Ok(PromotionStatus::Active),
            "DONE" => Ok(PromotionStatus::Done),
            other => Err(DomainError::Validation(format!(
                "status must be one of PENDING, ACTIVE, DONE (got {other:?})"
            ))),
        }
    }
}

impl fmt::Display for PromotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoostCount(i32);

impl BoostCount {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::Validation(
                "boost_count must be zero or greater".into(),
            ));
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::Validation("boost_count is too large".into()))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

/// Non-negative money amount stored as `NUMERIC(12, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Largest value a `NUMERIC(12, 2)` column holds: 9 999 999 999.99.
    pub fn max() -> Decimal {
        Decimal::new(999_999_999_999, 2)
    }

    /// Accepts at most two decimal places and rescales to exactly two, so
    /// `1500.5` becomes `1500.50`.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::Validation(
                "amount_paid must be zero or greater".into(),
            ));
        }
        let mut value = value.normalize();
        if value.scale() > 2 {
            return Err(DomainError::Validation(
                "amount_paid must have at most two decimal places".into(),
            ));
        }
        if value > Self::max() {
            return Err(DomainError::Validation("amount_paid is too large".into()));
        }
        value.rescale(2);
        Ok(Self(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment reference; unique across promotions when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        fields::required_text("transaction_id", value, MAX_SHORT_TEXT).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
