use crate::domain::recipe::value_objects::RECIPE_COUNT;

/// Builds the single prompt sent for a generation attempt.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    format!(
        "You are an expert chef. Create {RECIPE_COUNT} diverse and delicious recipes using the \
         following ingredients: {}. Also include common pantry staples if needed (like oil, \
         salt, pepper, flour, etc.). The recipes should be creative but approachable for a \
         home cook.",
        ingredients.join(", ")
    )
}
