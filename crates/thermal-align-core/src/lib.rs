//! Core geometry for aligning a thermal capture with a layout capture.
//!
//! This crate is purely computational: the affine transform between the two
//! photographic coordinate spaces ("A" = thermal, "B" = layout), rotated
//! rectangle geometry, and the shared mask/region/origin types the field and
//! detection crates build on. It knows nothing about files, rendering, or
//! detection models.

mod calibration;
mod error;
mod logger;
mod mask;
mod origin;
mod physical;
mod region;
mod rotation;
mod transform;

pub use calibration::{match_points, CalibrationPoints};
pub use error::CalibrationError;
pub use mask::BoolMask;
pub use origin::{OriginCorner, OriginFrame};
pub use physical::{EdgePadding, PhysicalFrame, PhysicalFrameParams};
pub use region::{RegionField, RegionSpec};
pub use rotation::{
    flatten_corners, point_in_polygon, rasterize_polygon, rotate_point, rotated_anchors,
    rotated_corners,
};
pub use transform::{BoardTransform, DEFAULT_PHYSICAL_SCALE};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
