pub mod artists;
pub mod managers;
pub mod pagination;
pub mod promotions;

pub use artists::{ArtistDto, ArtistSummaryDto};
pub use managers::{ManagerDto, ManagerSummaryDto};
pub use pagination::CursorPage;
pub use promotions::PromotionDto;
