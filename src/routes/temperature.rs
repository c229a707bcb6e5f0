use axum::{
    extract::{Path, State},
    Json,
};

use crate::common::AppState;
use crate::error::AppResult;

/// Observed temperatures for the year before the latest measurement
#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = 200, description = "Temperatures ordered by date", body = Vec<f64>),
        (status = 500, description = "No measurements recorded, or database error"),
    ),
    tag = "measurements"
)]
pub async fn get_last_year_tobs(State(state): State<AppState>) -> AppResult<Json<Vec<f64>>> {
    let temperatures = state.store().last_year_temperatures().await?;

    Ok(Json(temperatures))
}

/// Min, average and max temperature from `start` through today
///
/// `start` is compared as text against the stored `YYYY-MM-DD` dates. A value
/// that is not a date yields `[null, null, null]`.
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "Start date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "[min, avg, max]", body = Vec<Option<f64>>),
        (status = 500, description = "Database error"),
    ),
    tag = "measurements"
)]
pub async fn get_summary_from(
    State(state): State<AppState>,
    Path(start): Path<String>,
) -> AppResult<Json<[Option<f64>; 3]>> {
    let summary = state.store().temperature_summary(&start, "").await?;

    Ok(Json(summary.to_array()))
}

/// Min, average and max temperature from `start` through `end`, inclusive
#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "Start date, YYYY-MM-DD"),
        ("end" = String, Path, description = "End date, YYYY-MM-DD; blank means today"),
    ),
    responses(
        (status = 200, description = "[min, avg, max]", body = Vec<Option<f64>>),
        (status = 500, description = "Database error"),
    ),
    tag = "measurements"
)]
pub async fn get_summary_between(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> AppResult<Json<[Option<f64>; 3]>> {
    let summary = state.store().temperature_summary(&start, &end).await?;

    Ok(Json(summary.to_array()))
}
