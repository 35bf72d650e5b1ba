mod get_by_id;
mod get_by_slug;
mod list;
mod options;
mod service;

pub use get_by_id::GetArtistByIdQuery;
pub use get_by_slug::GetArtistBySlugQuery;
pub use list::ListArtistsQuery;
pub use service::ArtistQueryService;
