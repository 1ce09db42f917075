use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::GeneratedRecipes, value_objects::GenerationOptions},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw text of the model's answer. Transport-level failures
    /// are reported as [`CoreError::TransportError`].
    fn generate_with_text(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        ingredients: Vec<String>,
    ) -> impl Future<Output = Result<GeneratedRecipes, CoreError>> + Send;
}
