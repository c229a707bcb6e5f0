//! Read queries over the observations store.
//!
//! Dates are `YYYY-MM-DD` strings and every range filter is a plain text
//! comparison. Path input is passed through as-is, so a malformed date
//! yields an empty range (a summary of nulls) rather than an error.
//!
//! | Query | Rows |
//! |-------|------|
//! | [`ClimateStore::temperature_summary`] | one MIN/AVG/MAX triple |
//! | [`ClimateStore::all_precipitation`] | every measurement, by date |
//! | [`ClimateStore::all_stations`] | every station id, ascending |
//! | [`ClimateStore::last_year_temperatures`] | 365 days back from the latest date |

use chrono::{Days, Local, NaiveDate};
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::collections::BTreeMap;

use crate::entity::{measurement, station};
use crate::error::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed lookback for the tobs series, no leap-year adjustment
const LOOKBACK_DAYS: u64 = 365;

/// MIN/AVG/MAX of observed temperature over a date range.
///
/// All three are `None` when no row matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, FromQueryResult)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

impl TemperatureSummary {
    /// `[min, avg, max]`, the wire shape of the range endpoints
    #[must_use]
    pub fn to_array(&self) -> [Option<f64>; 3] {
        [self.tmin, self.tavg, self.tmax]
    }
}

/// Row counts of the two tables, logged at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetCounts {
    pub stations: u64,
    pub measurements: u64,
}

/// Data access handle borrowed from the application state for one request
#[derive(Clone, Copy)]
pub struct ClimateStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClimateStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// MIN/AVG/MAX of `tobs` for `start <= date <= end`.
    ///
    /// A blank `end` means today on the local system clock.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: &str,
    ) -> AppResult<TemperatureSummary> {
        let end = if end.trim().is_empty() {
            today()
        } else {
            end.to_string()
        };

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            r"
            SELECT
                MIN(tobs) AS tmin,
                AVG(tobs) AS tavg,
                MAX(tobs) AS tmax
            FROM measurement
            WHERE date >= ?
              AND date <= ?
            ",
            vec![start.into(), end.as_str().into()],
        );

        let summary = TemperatureSummary::find_by_statement(stmt)
            .one(self.db)
            .await?
            .unwrap_or_default();

        tracing::debug!(start = %start, end = %end, summary = ?summary, "temperature_summary");
        Ok(summary)
    }

    /// Every `(date, prcp)` pair ordered by date, duplicates kept
    pub async fn all_precipitation(&self) -> AppResult<Vec<(String, Option<f64>)>> {
        let rows: Vec<(String, Option<f64>)> = measurement::Entity::find()
            .select_only()
            .column(measurement::Column::Date)
            .column(measurement::Column::Prcp)
            .order_by_asc(measurement::Column::Date)
            .order_by_asc(measurement::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        tracing::debug!(rows = rows.len(), "all_precipitation");
        Ok(rows)
    }

    /// Every station id in ascending order
    pub async fn all_stations(&self) -> AppResult<Vec<String>> {
        let ids: Vec<String> = station::Entity::find()
            .select_only()
            .column(station::Column::Station)
            .order_by_asc(station::Column::Station)
            .into_tuple()
            .all(self.db)
            .await?;

        tracing::debug!(stations = ids.len(), "all_stations");
        Ok(ids)
    }

    /// Observed temperatures from the latest recorded date back 365 days.
    ///
    /// # Errors
    ///
    /// `AppError::NoData` when the measurement table is empty and
    /// `AppError::InvalidStoredDate` when the latest date is not `YYYY-MM-DD`.
    pub async fn last_year_temperatures(&self) -> AppResult<Vec<f64>> {
        let latest: Option<String> = measurement::Entity::find()
            .select_only()
            .column(measurement::Column::Date)
            .order_by_desc(measurement::Column::Date)
            .into_tuple()
            .one(self.db)
            .await?;

        let latest = latest
            .ok_or_else(|| AppError::NoData("No measurements recorded".to_string()))?;
        let cutoff = year_before(&latest)?;

        let temperatures: Vec<f64> = measurement::Entity::find()
            .select_only()
            .column(measurement::Column::Tobs)
            .filter(measurement::Column::Date.gte(cutoff.as_str()))
            .order_by_asc(measurement::Column::Date)
            .order_by_asc(measurement::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        tracing::debug!(
            latest = %latest,
            cutoff = %cutoff,
            rows = temperatures.len(),
            "last_year_temperatures"
        );
        Ok(temperatures)
    }

    /// Row counts of both tables. Fails if either table is missing.
    pub async fn dataset_counts(&self) -> AppResult<DatasetCounts> {
        let stations = station::Entity::find().count(self.db).await?;
        let measurements = measurement::Entity::find().count(self.db).await?;

        Ok(DatasetCounts {
            stations,
            measurements,
        })
    }
}

/// Fold `(date, prcp)` pairs into a date-keyed map.
///
/// Rows are applied in order, so for a repeated date the last row wins.
pub fn fold_precipitation<I>(rows: I) -> BTreeMap<String, Option<f64>>
where
    I: IntoIterator<Item = (String, Option<f64>)>,
{
    rows.into_iter().collect()
}

/// `date` minus 365 days, formatted `YYYY-MM-DD`
pub fn year_before(date: &str) -> AppResult<String> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .ok()
        .and_then(|d| d.checked_sub_days(Days::new(LOOKBACK_DAYS)))
        .map(|d| d.format(DATE_FORMAT).to_string())
        .ok_or_else(|| AppError::InvalidStoredDate(date.to_string()))
}

/// Today's local date as `YYYY-MM-DD`
#[must_use]
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
