use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ingredient::IngredientSet, recipe::entities::Recipe};

/// Outcome of the most recent generation, as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Ready {
        recipes: Vec<Recipe>,
    },
    Failed {
        message: String,
    },
}

impl GenerationStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationStatus::Loading)
    }
}

/// Everything the presentation layer needs to render the kitchen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KitchenSnapshot {
    #[schema(value_type = Vec<String>)]
    pub ingredients: IngredientSet,
    pub status: GenerationStatus,
}
