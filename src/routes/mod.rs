pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::index,
        home::healthz,
        precipitation::get_precipitation,
        stations::list_stations,
        temperature::get_last_year_tobs,
        temperature::get_summary_from,
        temperature::get_summary_between,
    ),
    tags(
        (name = "home", description = "Route index and health check"),
        (name = "measurements", description = "Precipitation and temperature observations"),
        (name = "stations", description = "Weather stations"),
    ),
    info(
        title = "Climate API",
        description = "Read-only API over historical station weather observations",
        version = "1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    // Static segments take priority over `{start}`
    let api_routes = Router::new()
        .route("/precipitation", get(precipitation::get_precipitation))
        .route("/stations", get(stations::list_stations))
        .route("/tobs", get(temperature::get_last_year_tobs))
        .route("/{start}", get(temperature::get_summary_from))
        .route("/{start}/{end}", get(temperature::get_summary_between));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .route("/", get(home::index))
        .route("/healthz", get(home::healthz))
        .nest("/api/v1.0", api_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
