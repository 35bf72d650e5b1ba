// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_artist;
mod postgres_manager;
mod postgres_promotion;

pub use error::map_sqlx;
pub use postgres_artist::{PostgresArtistReadRepository, PostgresArtistWriteRepository};
pub use postgres_manager::PostgresManagerRepository;
pub use postgres_promotion::{PostgresPromotionReadRepository, PostgresPromotionWriteRepository};
