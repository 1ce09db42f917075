use axum::extract::State;
use ferriskitchen_core::domain::kitchen::KitchenSnapshot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    kitchen::validators::AddIngredientRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddIngredientResponse {
    /// False when the name was blank or already in the list
    pub added: bool,
    pub data: KitchenSnapshot,
}

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "kitchen",
    summary = "Add an ingredient",
    description = "Appends a trimmed ingredient unless it is blank or already present (case-insensitive).",
    responses(
        (status = 201, body = AddIngredientResponse, description = "Ingredient added"),
        (status = 200, body = AddIngredientResponse, description = "Ingredient ignored")
    ),
    request_body = AddIngredientRequest
)]
pub async fn add_ingredient(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddIngredientRequest>,
) -> Result<Response<AddIngredientResponse>, ApiError> {
    let added = state.kitchen.add_ingredient(&payload.name);
    let response = AddIngredientResponse {
        added,
        data: state.kitchen.snapshot(),
    };

    if added {
        Ok(Response::Created(response))
    } else {
        Ok(Response::OK(response))
    }
}
