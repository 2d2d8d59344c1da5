use thiserror::Error;

/// Errors raised while building a calibration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    /// A correspondence set must hold exactly 3 points per image.
    #[error("expected exactly 3 calibration points per image, got {image_a} in A and {image_b} in B")]
    PointCount { image_a: usize, image_b: usize },

    /// Collinear or duplicated points leave the affine solve singular; the
    /// calibration must be redone rather than approximated.
    #[error("calibration points are collinear or duplicated; the affine solve is singular")]
    Degenerate,
}
