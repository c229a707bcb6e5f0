//! Statically declared models for the two tables of the observations store.
//!
//! The store is owned elsewhere; these only describe its shape.

pub mod measurement;
pub mod station;
