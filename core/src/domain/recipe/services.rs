use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::GeneratedRecipes,
        helpers::parse_recipes,
        ports::{LLMClient, RecipeService},
        prompt::build_recipe_prompt,
        value_objects::GenerationOptions,
    },
};

impl<LLM> RecipeService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(ingredient_count = ingredients.len()))]
    async fn generate_recipes(
        &self,
        ingredients: Vec<String>,
    ) -> Result<GeneratedRecipes, CoreError> {
        if ingredients.is_empty() {
            debug!("no ingredients supplied, skipping generation");
            return Ok(GeneratedRecipes::NoIngredients);
        }

        let prompt = build_recipe_prompt(&ingredients);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, GenerationOptions::recipes())
            .await?;

        let recipes = parse_recipes(&raw_response)?;
        debug!(recipe_count = recipes.len(), "recipes generated");

        Ok(GeneratedRecipes::Recipes(recipes))
    }
}
