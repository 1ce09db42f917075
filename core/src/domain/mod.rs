pub mod common;
pub mod ingredient;
pub mod kitchen;
pub mod recipe;
