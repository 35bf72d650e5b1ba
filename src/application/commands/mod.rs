pub mod artists;
pub mod managers;
pub mod promotions;
