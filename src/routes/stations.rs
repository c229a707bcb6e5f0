use axum::{extract::State, Json};

use crate::common::AppState;
use crate::error::AppResult;

/// List all station identifiers in ascending order
#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = 200, description = "Station identifiers", body = Vec<String>),
        (status = 500, description = "Database error"),
    ),
    tag = "stations"
)]
pub async fn list_stations(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let stations = state.store().all_stations().await?;

    Ok(Json(stations))
}
