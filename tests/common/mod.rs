//! Shared fixtures: an in-memory observations store built from the entities.

#![allow(dead_code)]

use sea_orm::{
    ActiveValue::Set, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    Schema,
};

use climate_api::common::AppState;
use climate_api::entity::{measurement, station};

/// `(station, date, prcp, tobs)`
pub type MeasurementRow<'a> = (&'a str, &'a str, Option<f64>, f64);

pub async fn setup_db() -> DatabaseConnection {
    // A single connection, otherwise every pooled connection gets its own empty database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(station::Entity)))
        .await
        .expect("Failed to create station table");
    db.execute(backend.build(&schema.create_table_from_entity(measurement::Entity)))
        .await
        .expect("Failed to create measurement table");

    db
}

pub async fn seed_measurements(db: &DatabaseConnection, rows: &[MeasurementRow<'_>]) {
    if rows.is_empty() {
        return;
    }

    let models = rows.iter().map(|&(station, date, prcp, tobs)| measurement::ActiveModel {
        station: Set(station.to_string()),
        date: Set(date.to_string()),
        prcp: Set(prcp),
        tobs: Set(tobs),
        ..Default::default()
    });

    measurement::Entity::insert_many(models)
        .exec(db)
        .await
        .expect("Failed to seed measurements");
}

pub async fn seed_stations(db: &DatabaseConnection, ids: &[&str]) {
    if ids.is_empty() {
        return;
    }

    let models = ids.iter().map(|id| station::ActiveModel {
        station: Set((*id).to_string()),
        name: Set(format!("{id} station")),
        latitude: Set(21.3),
        longitude: Set(-157.8),
        elevation: Set(3.0),
        ..Default::default()
    });

    station::Entity::insert_many(models)
        .exec(db)
        .await
        .expect("Failed to seed stations");
}

pub fn test_state(db: DatabaseConnection) -> AppState {
    AppState::new(db)
}
