mod create;
mod delete;
mod service;
mod update;

pub use create::CreatePromotionCommand;
pub use delete::DeletePromotionCommand;
pub use service::PromotionCommandService;
pub use update::UpdatePromotionCommand;
