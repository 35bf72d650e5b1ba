mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetPromotionQuery;
pub use list::ListPromotionsQuery;
pub use service::PromotionQueryService;
