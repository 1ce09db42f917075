use super::handlers::{
    add_ingredient::{__path_add_ingredient, add_ingredient},
    generate_recipes::{__path_generate_recipes, generate_recipes},
    get_kitchen::{__path_get_kitchen, get_kitchen},
    remove_ingredient::{__path_remove_ingredient, remove_ingredient},
    stream_kitchen::{__path_stream_kitchen, stream_kitchen},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_kitchen,
    add_ingredient,
    remove_ingredient,
    generate_recipes,
    stream_kitchen
))]
pub struct KitchenApiDoc;

pub fn kitchen_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/kitchen", state.args.server.root_path),
            get(get_kitchen),
        )
        .route(
            &format!("{}/kitchen/ingredients", state.args.server.root_path),
            post(add_ingredient),
        )
        .route(
            &format!(
                "{}/kitchen/ingredients/{{position}}",
                state.args.server.root_path
            ),
            delete(remove_ingredient),
        )
        .route(
            &format!("{}/kitchen/recipes", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/kitchen/events", state.args.server.root_path),
            get(stream_kitchen),
        )
}
