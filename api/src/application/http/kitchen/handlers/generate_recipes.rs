use axum::extract::State;
use ferriskitchen_core::domain::kitchen::{GenerationStatus, KitchenSnapshot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub data: KitchenSnapshot,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "kitchen",
    summary = "Generate recipes",
    description = "Asks the LLM for recipes built from the current ingredients. A failed generation is reported in the returned status.",
    responses(
        (status = 200, body = GenerateRecipesResponse),
        (status = 409, description = "A generation is already running")
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let status = state.kitchen.generate().await.map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse::new(
        state.kitchen.snapshot(),
        status,
    )))
}

impl GenerateRecipesResponse {
    /// Reports this call's outcome even if another request has already moved
    /// the shared status on.
    fn new(mut snapshot: KitchenSnapshot, status: GenerationStatus) -> Self {
        snapshot.status = status;
        Self { data: snapshot }
    }
}
