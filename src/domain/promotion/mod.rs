pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    NewPromotion, Promotion, PromotionDetails, PromotionFields, PromotionInput, PromotionUpdate,
};
pub use repository::{PromotionReadRepository, PromotionWriteRepository};
pub use value_objects::{Amount, BoostCount, PromotionId, PromotionStatus, TransactionId};
