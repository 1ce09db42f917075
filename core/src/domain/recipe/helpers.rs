use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

/// Validates a raw model answer against the declared recipe schema.
///
/// The payload is trimmed first. Blank payloads are reported as
/// [`CoreError::EmptyResponse`]; anything that is not an array of complete
/// recipe objects is a [`CoreError::MalformedResponse`] whose message names
/// the offending path. The parsed recipes are returned untouched: no
/// reordering, deduplication or count limit.
pub fn parse_recipes(raw_response: &str) -> Result<Vec<Recipe>, CoreError> {
    let payload = raw_response.trim();
    if payload.is_empty() {
        tracing::error!("Received an empty response from the LLM");
        return Err(CoreError::EmptyResponse);
    }

    let mut deserializer = serde_json::Deserializer::from_str(payload);
    let recipes: Vec<Recipe> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            tracing::error!("Invalid recipes format: {}", e);
            CoreError::MalformedResponse(e.to_string())
        })?;

    deserializer.end().map_err(|e| {
        tracing::error!("Trailing data after recipes: {}", e);
        CoreError::MalformedResponse(e.to_string())
    })?;

    Ok(recipes)
}
