pub mod climate;

pub use climate::{fold_precipitation, ClimateStore, DatasetCounts, TemperatureSummary};
