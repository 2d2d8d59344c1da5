//! High-level facade crate for the `thermal-align-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - end-to-end helpers composing calibration, boundary cropping, and region
//!   queries
//! - (feature-gated) capture loading and marker detection from image files
//!
//! ## Quickstart
//!
//! ```
//! use thermal_align::{BoardTransform, CalibrationPoints, TemperatureField, TemperatureMatrix};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let calibration = CalibrationPoints::from_pairs(
//!     [(588.0, 135.0), (220.0, 387.0), (1175.0, 782.0)],
//!     [(563.0, 160.0), (234.0, 396.0), (1105.0, 735.0)],
//! );
//! let transform = BoardTransform::with_default_scale(&calibration)?;
//!
//! let field = TemperatureField::new(TemperatureMatrix::from_rows(&[
//!     vec![21.0, 22.5],
//!     vec![24.0, 23.0],
//! ])?);
//! let hottest = field.max_in_box(0.0, 0.0, 2.0, 2.0, 1.0);
//! assert_eq!(hottest, 24.0);
//! let _ = transform.a_to_b(100.0, 150.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `thermal_align::core`: transforms, calibration, rotated-rect geometry,
//!   masks, origins, physical frames.
//! - `thermal_align::field`: the temperature matrix and its region queries.
//! - `thermal_align::detect`: boundary contours and Hough circle markers.
//! - `thermal_align::capture` (feature `image`): load captures from disk and
//!   detect markers in them.

pub use thermal_align_core as core;
pub use thermal_align_detect as detect;
pub use thermal_align_field as field;

pub use thermal_align_core::{
    BoardTransform, BoolMask, CalibrationError, CalibrationPoints, RegionSpec,
};
pub use thermal_align_detect::{Circle, ClampedRect, MarkerClass};
pub use thermal_align_field::{FieldError, Hotspot, TemperatureField, TemperatureMatrix};

mod pipeline;
pub use pipeline::{crop_field_to_board, query_region, PipelineError};

#[cfg(feature = "image")]
pub mod capture;
