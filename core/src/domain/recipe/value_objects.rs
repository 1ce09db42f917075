use serde_json::Value;

use crate::domain::recipe::schema::get_recipe_schema;

pub const RECIPE_COUNT: usize = 3;
pub const RECIPE_TEMPERATURE: f64 = 0.8;
pub const RECIPE_TOP_P: f64 = 0.9;

/// Structured-output settings sent along with a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub response_schema: Value,
    pub temperature: f64,
    pub top_p: f64,
}

impl GenerationOptions {
    pub fn recipes() -> Self {
        Self {
            response_schema: get_recipe_schema(),
            temperature: RECIPE_TEMPERATURE,
            top_p: RECIPE_TOP_P,
        }
    }
}
