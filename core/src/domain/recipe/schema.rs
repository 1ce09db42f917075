use serde_json::json;

/// Returns the JSON schema for recipe generation LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "description": "A list of three creative and delicious recipes.",
        "items": {
            "type": "object",
            "properties": {
                "recipeName": {
                    "type": "string",
                    "description": "The name of the recipe."
                },
                "description": {
                    "type": "string",
                    "description": "A short, enticing description of the dish."
                },
                "ingredients": {
                    "type": "array",
                    "description": "A list of all ingredients needed for the recipe, including quantities. It should also list ingredients that are not provided by the user but are commonly available, such as salt, pepper, oil.",
                    "items": { "type": "string" }
                },
                "instructions": {
                    "type": "array",
                    "description": "Step-by-step instructions to prepare the dish.",
                    "items": { "type": "string" }
                },
                "servings": {
                    "type": "string",
                    "description": "How many people this recipe serves."
                },
                "prepTime": {
                    "type": "string",
                    "description": "Estimated preparation and cooking time."
                }
            },
            "required": [
                "recipeName", "description", "ingredients",
                "instructions", "servings", "prepTime"
            ]
        }
    })
}
