//! Rotated-rectangle geometry.
//!
//! Screen coordinates have the Y axis pointing down, so a rotation that a
//! viewer reads as counter-clockwise is realized with a negated angle in the
//! rotation matrix. Every function here takes degrees.

use nalgebra::Point2;

use crate::mask::BoolMask;

#[inline]
fn rotation_terms(angle_deg: f64) -> (f64, f64) {
    let rad = -angle_deg.to_radians();
    rad.sin_cos()
}

/// The four corners of a rectangle rotated about its center.
///
/// Corner order is TL, TR, BR, BL.
pub fn rotated_corners(
    cx: f64,
    cy: f64,
    half_w: f64,
    half_h: f64,
    angle_deg: f64,
) -> [Point2<f64>; 4] {
    let (sin_a, cos_a) = rotation_terms(angle_deg);
    let offsets = [
        (-half_w, -half_h),
        (half_w, -half_h),
        (half_w, half_h),
        (-half_w, half_h),
    ];
    offsets.map(|(dx, dy)| {
        Point2::new(
            cos_a * dx - sin_a * dy + cx,
            sin_a * dx + cos_a * dy + cy,
        )
    })
}

/// Rotate a single point about `(cx, cy)`.
pub fn rotate_point(px: f64, py: f64, cx: f64, cy: f64, angle_deg: f64) -> (f64, f64) {
    let (sin_a, cos_a) = rotation_terms(angle_deg);
    let dx = px - cx;
    let dy = py - cy;
    (
        cos_a * dx - sin_a * dy + cx,
        sin_a * dx + cos_a * dy + cy,
    )
}

/// The eight interactive anchor positions of a rotated rectangle.
///
/// Index order is a stable contract with editing collaborators and must not
/// change: 0=TL, 1=TR, 2=BL, 3=BR, 4=left-mid, 5=right-mid, 6=top-mid,
/// 7=bottom-mid.
pub fn rotated_anchors(
    cx: f64,
    cy: f64,
    half_w: f64,
    half_h: f64,
    angle_deg: f64,
) -> [Point2<f64>; 8] {
    let (sin_a, cos_a) = rotation_terms(angle_deg);
    let offsets = [
        (-half_w, -half_h),
        (half_w, -half_h),
        (-half_w, half_h),
        (half_w, half_h),
        (-half_w, 0.0),
        (half_w, 0.0),
        (0.0, -half_h),
        (0.0, half_h),
    ];
    offsets.map(|(dx, dy)| {
        Point2::new(
            cos_a * dx - sin_a * dy + cx,
            sin_a * dx + cos_a * dy + cy,
        )
    })
}

/// Interleave corner coordinates into the flat `[x0, y0, x1, y1, ..]` list
/// drawing backends consume.
pub fn flatten_corners(corners: &[Point2<f64>]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(corners.len() * 2);
    for p in corners {
        flat.push(p.x);
        flat.push(p.y);
    }
    flat
}

/// Even-odd ray-casting point-in-polygon test.
///
/// A horizontal edge never straddles the scanline (both endpoint tests agree),
/// so its crossing abscissa is never evaluated and no division by zero can
/// occur.
pub fn point_in_polygon(px: f64, py: f64, corners: &[Point2<f64>]) -> bool {
    let n = corners.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (corners[i].x, corners[i].y);
        let (xj, yj) = (corners[j].x, corners[j].y);
        if (yi > py) != (yj > py) {
            let cross_x = (xj - xi) * (py - yi) / (yj - yi) + xi;
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Scan-fill a convex polygon into a boolean mask of the given
/// `(height, width)` shape.
///
/// Corner coordinates are truncated to integers first, and boundary pixels
/// are included in the fill. Cells outside the shape are clipped, so the
/// result always has exactly the requested dimensions.
pub fn rasterize_polygon(corners: &[Point2<f64>], shape_hw: (usize, usize)) -> BoolMask {
    let (height, width) = shape_hw;
    let mut mask = BoolMask::new(width, height);
    if corners.len() < 3 || width == 0 || height == 0 {
        log::debug!(
            "degenerate rasterization request: {} corners into {}x{}",
            corners.len(),
            width,
            height
        );
        return mask;
    }

    let pts: Vec<(i64, i64)> = corners
        .iter()
        .map(|p| (p.x.trunc() as i64, p.y.trunc() as i64))
        .collect();

    let y_lo = pts.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let y_hi = pts
        .iter()
        .map(|p| p.1)
        .max()
        .unwrap_or(-1)
        .min(height as i64 - 1);

    for y in y_lo..=y_hi {
        // Convexity keeps each scanline's covered span contiguous, so the
        // min/max edge intersections bound the fill.
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for i in 0..pts.len() {
            let (x1, y1) = pts[i];
            let (x2, y2) = pts[(i + 1) % pts.len()];
            if y1 == y2 {
                if y1 == y {
                    lo = lo.min(x1.min(x2) as f64);
                    hi = hi.max(x1.max(x2) as f64);
                }
                continue;
            }
            if y < y1.min(y2) || y > y1.max(y2) {
                continue;
            }
            let t = (y - y1) as f64 / (y2 - y1) as f64;
            let x = x1 as f64 + t * (x2 - x1) as f64;
            lo = lo.min(x);
            hi = hi.max(x);
        }
        if lo > hi {
            continue;
        }
        let x_lo = (lo.ceil() as i64).max(0);
        let x_hi = (hi.floor() as i64).min(width as i64 - 1);
        for x in x_lo..=x_hi {
            mask.set(x as usize, y as usize, true);
        }
    }

    mask
}
