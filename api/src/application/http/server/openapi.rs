use crate::application::http::kitchen::router::KitchenApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FerrisKitchen API"
    ),
    nest(
        (path = "/kitchen", api = KitchenApiDoc),
    )
)]
pub struct ApiDoc;
