// src/application/commands/artists/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateArtistCommand;
pub use delete::DeleteArtistCommand;
pub use service::ArtistCommandService;
pub use update::UpdateArtistCommand;
