use thermal_align_core::{BoardTransform, BoolMask};
use thermal_align_field::TemperatureField;

use crate::contour::BoundaryRect;

/// A boundary rectangle mapped into field coordinates. Both corners are
/// clamped inside the matrix and are inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClampedRect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

/// Map a layout-space boundary rectangle into thermal-field coordinates.
///
/// Both corners go through the B -> A direction of the transform and are
/// then clamped independently into `[0, width-1] x [0, height-1]` of the
/// field.
pub fn transform_boundary_to_field(
    rect: &BoundaryRect,
    transform: &BoardTransform,
    shape_hw: (usize, usize),
) -> ClampedRect {
    let (height, width) = shape_hw;
    let (ax1, ay1) = transform.b_to_a(rect.x1 as f64, rect.y1 as f64);
    let (ax2, ay2) = transform.b_to_a(rect.x2 as f64, rect.y2 as f64);
    let clamp = |v: f64, dim: usize| {
        let hi = (dim as i64 - 1).max(0);
        (v.trunc() as i64).clamp(0, hi) as usize
    };
    let clamped = ClampedRect {
        x1: clamp(ax1, width),
        y1: clamp(ay1, height),
        x2: clamp(ax2, width),
        y2: clamp(ay2, height),
    };
    log::debug!(
        "boundary ({}, {})-({}, {}) in layout space -> ({}, {})-({}, {}) in field space",
        rect.x1,
        rect.y1,
        rect.x2,
        rect.y2,
        clamped.x1,
        clamped.y1,
        clamped.x2,
        clamped.y2
    );
    clamped
}

/// Zero every field cell outside the detected board rectangle.
///
/// Everything outside the board outline is non-board noise and is discarded.
pub fn apply_boundary(field: &mut TemperatureField, rect: &ClampedRect) {
    let (height, width) = field.matrix().shape();
    let mut keep = BoolMask::new(width, height);
    for y in rect.y1..=rect.y2 {
        for x in rect.x1..=rect.x2 {
            keep.set(x, y, true);
        }
    }
    field.crop_to_mask(&keep);
}
