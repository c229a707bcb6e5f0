use axum::{extract::State, Json};
use std::collections::BTreeMap;

use crate::common::AppState;
use crate::error::AppResult;
use crate::services::fold_precipitation;

/// Precipitation keyed by date
///
/// Folds every measurement into one object. When several stations report
/// the same date, the last row in date order overwrites the others.
#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = 200, description = "Date to precipitation mapping", body = BTreeMap<String, Option<f64>>),
        (status = 500, description = "Database error"),
    ),
    tag = "measurements"
)]
pub async fn get_precipitation(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, Option<f64>>>> {
    let rows = state.store().all_precipitation().await?;

    Ok(Json(fold_precipitation(rows)))
}
