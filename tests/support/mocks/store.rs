// tests/support/mocks/store.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use promo_desk::domain::artist::Artist;
use promo_desk::domain::cursor::ListCursor;
use promo_desk::domain::manager::Manager;
use promo_desk::domain::promotion::Promotion;

/// Rows shared by the in-memory repositories, keyed by id.
#[derive(Default)]
pub struct MemoryState {
    pub artists: BTreeMap<i64, Artist>,
    pub promotions: BTreeMap<i64, Promotion>,
    pub managers: BTreeMap<i64, Manager>,
    next_id: i64,
}

impl MemoryState {
    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type SharedState = Arc<Mutex<MemoryState>>;

pub fn shared_state() -> SharedState {
    Arc::new(Mutex::new(MemoryState::default()))
}

/// Keyset page over `(created_at DESC, id DESC)`, mirroring the SQL queries.
pub fn keyset_page<T>(
    mut rows: Vec<T>,
    key: impl Fn(&T) -> (DateTime<Utc>, i64),
    limit: u32,
    cursor: Option<ListCursor>,
) -> (Vec<T>, Option<ListCursor>) {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    if let Some(cursor) = cursor {
        rows.retain(|row| key(row) < (cursor.created_at, cursor.id));
    }
    let limit = limit.clamp(1, 100) as usize;
    let mut next = None;
    if rows.len() > limit {
        rows.truncate(limit);
        if let Some(last) = rows.last() {
            let (created_at, id) = key(last);
            next = Some(ListCursor::new(created_at, id));
        }
    }
    (rows, next)
}
