use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One dish returned by the generation service.
///
/// Every field is required; a payload missing any of them is rejected as a
/// whole rather than producing a partially populated recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "recipeName")]
    pub name: String,
    pub description: String,
    /// May list staples the user did not supply, such as salt or oil.
    pub ingredients: Vec<String>,
    /// One step per entry.
    pub instructions: Vec<String>,
    pub servings: String,
    pub prep_time: String,
}

/// Successful outcome of a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedRecipes {
    /// No ingredients were supplied, so no request was sent.
    NoIngredients,
    /// Recipes in the order the service returned them. May be empty.
    Recipes(Vec<Recipe>),
}
