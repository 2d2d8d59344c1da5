use nalgebra::{Matrix3, RowVector3, Vector3};

use crate::calibration::CalibrationPoints;
use crate::error::CalibrationError;

/// Default ratio between original layout-capture pixels and the working
/// display resolution. The two photos are shot at different physical zoom
/// levels; this factor is kept orthogonal to the affine matrix because it
/// corrects a capture-scale mismatch, not a geometric relationship.
pub const DEFAULT_PHYSICAL_SCALE: f64 = 3.2;

const SINGULARITY_EPS: f64 = 1e-9;

/// Affine map between the thermal capture (A) and the layout capture (B).
///
/// Built once from a [`CalibrationPoints`] set and immutable afterwards.
/// The forward homogeneous matrix takes B-space points to A-space; its
/// inverse goes the other way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardTransform {
    b2a: Matrix3<f64>,
    a2b: Matrix3<f64>,
    physical_scale: f64,
}

impl BoardTransform {
    /// Solve the affine map taking the B-space calibration points onto the
    /// A-space ones.
    ///
    /// Three non-collinear correspondences determine the 2x3 map exactly, so
    /// the solve is a pair of square linear systems rather than a
    /// least-squares fit. The 2x3 result is promoted to a homogeneous 3x3
    /// matrix and inverted for the reverse direction. Collinear or duplicate
    /// points in either image leave a singular matrix and are rejected.
    pub fn from_points(
        points: &CalibrationPoints,
        physical_scale: f64,
    ) -> Result<Self, CalibrationError> {
        // Coefficients are the homogeneous B points, shared by both rows of
        // the affine matrix.
        let coeffs = Matrix3::from_rows(&[
            RowVector3::new(points.image_b[0].x, points.image_b[0].y, 1.0),
            RowVector3::new(points.image_b[1].x, points.image_b[1].y, 1.0),
            RowVector3::new(points.image_b[2].x, points.image_b[2].y, 1.0),
        ]);
        let lu = coeffs.lu();
        let row_x = lu
            .solve(&Vector3::new(
                points.image_a[0].x,
                points.image_a[1].x,
                points.image_a[2].x,
            ))
            .ok_or(CalibrationError::Degenerate)?;
        let row_y = lu
            .solve(&Vector3::new(
                points.image_a[0].y,
                points.image_a[1].y,
                points.image_a[2].y,
            ))
            .ok_or(CalibrationError::Degenerate)?;

        let b2a = Matrix3::from_rows(&[
            RowVector3::new(row_x[0], row_x[1], row_x[2]),
            RowVector3::new(row_y[0], row_y[1], row_y[2]),
            RowVector3::new(0.0, 0.0, 1.0),
        ]);
        if b2a.determinant().abs() < SINGULARITY_EPS {
            return Err(CalibrationError::Degenerate);
        }
        let a2b = b2a.try_inverse().ok_or(CalibrationError::Degenerate)?;

        log::debug!("board transform built, det {:.6}", b2a.determinant());

        Ok(Self {
            b2a,
            a2b,
            physical_scale,
        })
    }

    pub fn with_default_scale(points: &CalibrationPoints) -> Result<Self, CalibrationError> {
        Self::from_points(points, DEFAULT_PHYSICAL_SCALE)
    }

    pub fn physical_scale(&self) -> f64 {
        self.physical_scale
    }

    /// Map a layout-capture (B) point into thermal (A) coordinates.
    ///
    /// B coordinates are divided by the physical scale factor before the
    /// homogeneous multiply, because layout pixels represent a different
    /// physical zoom than thermal pixels.
    pub fn b_to_a(&self, x: f64, y: f64) -> (f64, f64) {
        let v = self.b2a
            * Vector3::new(
                x / self.physical_scale,
                y / self.physical_scale,
                1.0,
            );
        (v[0], v[1])
    }

    /// Map a thermal (A) point into layout-capture (B) coordinates.
    ///
    /// Exact inverse of [`b_to_a`](Self::b_to_a): the homogeneous inverse
    /// multiply, then the physical scale back, so the round trip recovers
    /// the input at any scale factor.
    pub fn a_to_b(&self, x: f64, y: f64) -> (f64, f64) {
        let v = self.a2b * Vector3::new(x, y, 1.0);
        (v[0] * self.physical_scale, v[1] * self.physical_scale)
    }

    /// Recover original-capture B coordinates from display-scaled ones,
    /// truncated to integers.
    pub fn current_b_to_original_b(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x * self.physical_scale) as i64,
            (y * self.physical_scale) as i64,
        )
    }

    /// The homogeneous B -> A matrix as rows, for reports.
    pub fn to_array(&self) -> [[f64; 3]; 3] {
        [
            [self.b2a[(0, 0)], self.b2a[(0, 1)], self.b2a[(0, 2)]],
            [self.b2a[(1, 0)], self.b2a[(1, 1)], self.b2a[(1, 2)]],
            [self.b2a[(2, 0)], self.b2a[(2, 1)], self.b2a[(2, 2)]],
        ]
    }
}
