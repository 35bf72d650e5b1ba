// tests/support/mocks/promotion_repos.rs
use async_trait::async_trait;
use promo_desk::domain::cursor::ListCursor;
use promo_desk::domain::errors::{DomainError, DomainResult};
use promo_desk::domain::promotion::{
    NewPromotion, Promotion, PromotionDetails, PromotionFields, PromotionId, PromotionReadRepository,
    PromotionUpdate, PromotionWriteRepository, TransactionId,
};

use super::store::{MemoryState, SharedState, keyset_page};

/// Promotion table held in memory, joined against the shared artist and manager rows.
pub struct InMemoryPromotions {
    state: SharedState,
}

impl InMemoryPromotions {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    pub fn count(&self) -> usize {
        self.state.lock().unwrap().promotions.len()
    }

    fn details(state: &MemoryState, promotion: &Promotion) -> DomainResult<PromotionDetails> {
        let artist = state
            .artists
            .get(&i64::from(promotion.fields.artist_id))
            .ok_or_else(|| DomainError::Persistence("dangling artist reference".into()))?;
        let manager = state
            .managers
            .get(&i64::from(promotion.fields.manager_id))
            .ok_or_else(|| DomainError::Persistence("dangling manager reference".into()))?;
        Ok(PromotionDetails {
            promotion: promotion.clone(),
            artist: artist.summary(),
            manager: manager.summary(),
        })
    }

    /// Mirrors the foreign keys and the unique transaction id constraint.
    fn check_references(
        state: &MemoryState,
        fields: &PromotionFields,
        exclude: Option<PromotionId>,
    ) -> DomainResult<()> {
        if !state.artists.contains_key(&i64::from(fields.artist_id)) {
            return Err(DomainError::Validation(
                "artist_id does not reference an artist".into(),
            ));
        }
        if !state.managers.contains_key(&i64::from(fields.manager_id)) {
            return Err(DomainError::Validation(
                "manager_id does not reference a manager".into(),
            ));
        }
        if let Some(tx) = &fields.transaction_id {
            let taken = state.promotions.values().any(|p| {
                Some(p.id) != exclude && p.fields.transaction_id.as_ref() == Some(tx)
            });
            if taken {
                return Err(DomainError::Conflict("transaction_id already recorded".into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PromotionWriteRepository for InMemoryPromotions {
    async fn insert(&self, promotion: NewPromotion) -> DomainResult<Promotion> {
        let mut state = self.state.lock().unwrap();
        Self::check_references(&state, &promotion.fields, None)?;
        let id = PromotionId::new(state.next_id())?;
        let created = Promotion {
            id,
            fields: promotion.fields,
            created_at: promotion.created_at,
            updated_at: promotion.updated_at,
        };
        state.promotions.insert(id.into(), created.clone());
        Ok(created)
    }

    async fn update(&self, update: PromotionUpdate) -> DomainResult<Promotion> {
        let mut state = self.state.lock().unwrap();
        Self::check_references(&state, &update.fields, Some(update.id))?;
        let existing = state
            .promotions
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("promotion not found".into()))?;
        existing.fields = update.fields;
        existing.updated_at = update.updated_at;
        Ok(existing.clone())
    }

    async fn delete(&self, id: PromotionId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state
            .promotions
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("promotion not found".into()))
    }
}

#[async_trait]
impl PromotionReadRepository for InMemoryPromotions {
    async fn find_by_id(&self, id: PromotionId) -> DomainResult<Option<PromotionDetails>> {
        let state = self.state.lock().unwrap();
        state
            .promotions
            .get(&i64::from(id))
            .map(|p| Self::details(&state, p))
            .transpose()
    }

    async fn transaction_id_exists(
        &self,
        transaction_id: &TransactionId,
        exclude: Option<PromotionId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.promotions.values().any(|p| {
            Some(p.id) != exclude && p.fields.transaction_id.as_ref() == Some(transaction_id)
        }))
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<PromotionDetails>, Option<ListCursor>)> {
        let state = self.state.lock().unwrap();
        let rows = state
            .promotions
            .values()
            .map(|p| Self::details(&state, p))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(keyset_page(
            rows,
            |d| (d.promotion.created_at, i64::from(d.promotion.id)),
            limit,
            cursor,
        ))
    }
}
