//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod hotels;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use innkeep_app::ports::HotelRepository;
use innkeep_domain::hotel::Hotel;

use crate::state::AppState;

/// `OpenAPI` description of the hotel API.
#[derive(OpenApi)]
#[openapi(
    info(title = "innkeep", description = "Hotel resource REST API", version = "1.0"),
    paths(
        hotels::list,
        hotels::create,
        hotels::get,
        hotels::update,
        hotels::delete,
    ),
    components(schemas(Hotel, hotels::CreateHotelRequest, hotels::UpdateHotelRequest)),
    tags((name = "Hotel Controller", description = "Hotel CRUD operations"))
)]
pub struct ApiDoc;

/// Build the `/api/v1` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: HotelRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/hotels", get(hotels::list::<R>).post(hotels::create::<R>))
        .route(
            "/hotels/{id}",
            get(hotels::get::<R>)
                .put(hotels::update::<R>)
                .delete(hotels::delete::<R>),
        )
        .route("/openapi.json", get(openapi))
}

/// `GET /api/v1/openapi.json` — the generated `OpenAPI` document.
async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
