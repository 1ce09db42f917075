use axum::extract::{Path, State};
use ferriskitchen_core::domain::kitchen::KitchenSnapshot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RemoveIngredientResponse {
    /// The removed ingredient, or null when the position was out of range
    pub removed: Option<String>,
    pub data: KitchenSnapshot,
}

#[utoipa::path(
    delete,
    path = "/ingredients/{position}",
    tag = "kitchen",
    summary = "Remove an ingredient",
    description = "Removes the ingredient at the given zero-based position. Out-of-range positions are ignored.",
    responses(
        (status = 200, body = RemoveIngredientResponse)
    ),
    params(
        ("position" = usize, Path, description = "Zero-based ingredient position"),
    ),
)]
pub async fn remove_ingredient(
    Path(position): Path<usize>,
    State(state): State<AppState>,
) -> Result<Response<RemoveIngredientResponse>, ApiError> {
    let removed = state.kitchen.remove_ingredient(position);

    Ok(Response::OK(RemoveIngredientResponse {
        removed,
        data: state.kitchen.snapshot(),
    }))
}
