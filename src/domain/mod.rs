pub mod artist;
pub mod cursor;
pub mod errors;
pub mod fields;
pub mod manager;
pub mod promotion;
