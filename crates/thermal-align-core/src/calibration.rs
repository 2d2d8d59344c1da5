use nalgebra::Point2;

use crate::error::CalibrationError;

/// Three ordered point correspondences between the thermal capture (A) and
/// the layout capture (B). Index `i` in one set pairs with index `i` in the
/// other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationPoints {
    pub image_a: [Point2<f64>; 3],
    pub image_b: [Point2<f64>; 3],
}

impl CalibrationPoints {
    pub fn new(image_a: [Point2<f64>; 3], image_b: [Point2<f64>; 3]) -> Self {
        Self { image_a, image_b }
    }

    /// Validate that both slices hold exactly 3 points.
    pub fn from_slices(
        image_a: &[Point2<f64>],
        image_b: &[Point2<f64>],
    ) -> Result<Self, CalibrationError> {
        let a: [Point2<f64>; 3] =
            image_a
                .try_into()
                .map_err(|_| CalibrationError::PointCount {
                    image_a: image_a.len(),
                    image_b: image_b.len(),
                })?;
        let b: [Point2<f64>; 3] =
            image_b
                .try_into()
                .map_err(|_| CalibrationError::PointCount {
                    image_a: image_a.len(),
                    image_b: image_b.len(),
                })?;
        Ok(Self::new(a, b))
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_pairs(image_a: [(f64, f64); 3], image_b: [(f64, f64); 3]) -> Self {
        Self::new(
            image_a.map(|(x, y)| Point2::new(x, y)),
            image_b.map(|(x, y)| Point2::new(x, y)),
        )
    }
}

/// Re-pair two unordered three-point sets by total distance.
///
/// Marker detection runs independently per capture, so the two lists can
/// arrive in arbitrary order. All 3! assignments of B-points to A-points are
/// scored by summed Euclidean distance and the cheapest one wins.
pub fn match_points(
    image_a: &[Point2<f64>],
    image_b: &[Point2<f64>],
) -> Result<CalibrationPoints, CalibrationError> {
    const PERMS: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    let unordered = CalibrationPoints::from_slices(image_a, image_b)?;

    let mut best = unordered.image_b;
    let mut best_cost = f64::INFINITY;
    for perm in PERMS {
        let cost: f64 = (0..3)
            .map(|i| (unordered.image_a[i] - unordered.image_b[perm[i]]).norm())
            .sum();
        if cost < best_cost {
            best_cost = cost;
            best = perm.map(|j| unordered.image_b[j]);
        }
    }
    log::debug!("matched calibration points, total pair distance {best_cost:.2}px");

    Ok(CalibrationPoints::new(unordered.image_a, best))
}
