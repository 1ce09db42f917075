use axum::extract::State;
use ferriskitchen_core::domain::kitchen::KitchenSnapshot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetKitchenResponse {
    pub data: KitchenSnapshot,
}

#[utoipa::path(
    get,
    path = "",
    tag = "kitchen",
    summary = "Get kitchen state",
    description = "Returns the current ingredient list and the status of the last recipe generation.",
    responses(
        (status = 200, body = GetKitchenResponse)
    ),
)]
pub async fn get_kitchen(
    State(state): State<AppState>,
) -> Result<Response<GetKitchenResponse>, ApiError> {
    Ok(Response::OK(GetKitchenResponse {
        data: state.kitchen.snapshot(),
    }))
}
