pub mod artists;
pub mod managers;
mod paging;
pub mod promotions;
