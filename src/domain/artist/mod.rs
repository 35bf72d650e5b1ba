pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Artist, ArtistProfile, ArtistProfileInput, ArtistSummary, ArtistUpdate, NewArtist};
pub use repository::{ArtistReadRepository, ArtistWriteRepository};
pub use value_objects::{ArtistId, ArtistName, ArtistSlug, EmailAddress};
