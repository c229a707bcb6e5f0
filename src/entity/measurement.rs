use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One station-day reading
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "measurement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Station identifier, matches `station.station`
    pub station: String,
    /// ISO `YYYY-MM-DD`, compared as text
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
