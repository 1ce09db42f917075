pub mod add_ingredient;
pub mod generate_recipes;
pub mod get_kitchen;
pub mod remove_ingredient;
pub mod stream_kitchen;
