//! Temperature field storage and region queries.
//!
//! The matrix is loaded once by an external collaborator, queried through
//! clamp-never-fail box/circle/polygon lookups, and mutated at most once by
//! the boundary crop.

mod matrix;
mod query;

pub use matrix::{FieldError, TemperatureMatrix};
pub use query::{Hotspot, TemperatureField};
