//! Boundary and marker detection for thermal board alignment.
//!
//! Consumes segmented binary masks and raw grayscale captures; produces the
//! crop rectangles and circle lists the calibration and field crates work
//! with.

mod boundary;
mod circles;
mod contour;
mod hough;

pub use boundary::{apply_boundary, transform_boundary_to_field, ClampedRect};
pub use circles::{circle_containing, Circle, MarkerClass};
pub use contour::{largest_contour, BoundaryRect};
pub use hough::{detect_circles, detect_marker_circles, HoughCircleParams};
