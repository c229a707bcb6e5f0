use sea_orm::DatabaseConnection;

use crate::services::ClimateStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Data access handle for the current request
    pub fn store(&self) -> ClimateStore<'_> {
        ClimateStore::new(&self.db)
    }
}
