// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod artist_repos;
pub mod manager_repo;
pub mod promotion_repos;
pub mod store;
pub mod time;
pub mod util;

pub use artist_repos::InMemoryArtists;
pub use manager_repo::InMemoryManagers;
pub use promotion_repos::InMemoryPromotions;
pub use store::{MemoryState, SharedState};
pub use time::fixed_now;
pub use util::{FixedClock, IdentitySlug, TickingClock};
