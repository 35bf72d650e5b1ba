pub mod entity;
pub mod repository;

pub use entity::{Manager, ManagerId, ManagerSummary, NewManager};
pub use repository::ManagerRepository;
