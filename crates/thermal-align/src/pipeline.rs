use thermal_align_core::{BoardTransform, BoolMask, CalibrationError, RegionSpec};
use thermal_align_detect::{apply_boundary, largest_contour, transform_boundary_to_field, ClampedRect};
use thermal_align_field::{FieldError, Hotspot, TemperatureField};

/// Errors surfaced by the end-to-end helpers and the CLI.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Calibration(#[from] CalibrationError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[cfg(feature = "image")]
    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crop a thermal field down to the board outline found in a layout-space mask.
///
/// Runs the full boundary chain: largest outer contour of `boundary_mask`,
/// its bounding rectangle mapped through the B -> A transform, clamped into
/// the field, then everything outside zeroed. Returns the field-space
/// rectangle that was kept, or `None` (field untouched) when the mask holds
/// no contour at all.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn crop_field_to_board(
    boundary_mask: &BoolMask,
    transform: &BoardTransform,
    field: &mut TemperatureField,
) -> Option<ClampedRect> {
    let rect = largest_contour(boundary_mask)?;
    let clamped = transform_boundary_to_field(&rect, transform, field.matrix().shape());
    apply_boundary(field, &clamped);
    log::info!(
        "cropped field to board rectangle ({}, {})-({}, {})",
        clamped.x1,
        clamped.y1,
        clamped.x2,
        clamped.y2
    );
    Some(clamped)
}

/// Hotspot of one layout-space region of interest against the field.
///
/// The region's (possibly rotated) corners are handed to the polygon query;
/// `scale` is the usual display-to-matrix ratio.
pub fn query_region(field: &TemperatureField, region: &RegionSpec, scale: f64) -> Hotspot {
    field.hotspot_in_polygon(&region.corners(), scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermal_align_core::CalibrationPoints;
    use thermal_align_field::TemperatureMatrix;

    fn identity_transform() -> BoardTransform {
        let points = CalibrationPoints::from_pairs(
            [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
            [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
        );
        BoardTransform::from_points(&points, 1.0).expect("identity")
    }

    #[test]
    fn empty_mask_leaves_the_field_alone() {
        let rows = vec![vec![7.0; 5]; 5];
        let mut field =
            TemperatureField::new(TemperatureMatrix::from_rows(&rows).expect("rectangular"));
        let kept = crop_field_to_board(&BoolMask::new(5, 5), &identity_transform(), &mut field);
        assert!(kept.is_none());
        assert_eq!(field.matrix().get(0, 0), 7.0);
        assert_eq!(field.matrix().get(4, 4), 7.0);
    }

    #[test]
    fn board_blob_crops_the_surroundings() {
        let mut mask = BoolMask::new(10, 10);
        for y in 2..=6 {
            for x in 3..=7 {
                mask.set(x, y, true);
            }
        }
        let rows = vec![vec![5.0; 10]; 10];
        let mut field =
            TemperatureField::new(TemperatureMatrix::from_rows(&rows).expect("rectangular"));

        let kept = crop_field_to_board(&mask, &identity_transform(), &mut field)
            .expect("one contour in the mask");
        assert!(kept.x1 <= 3 && kept.x2 >= 7);
        assert!(kept.y1 <= 2 && kept.y2 >= 6);

        assert_eq!(field.matrix().get(5, 4), 5.0);
        assert_eq!(field.matrix().get(0, 0), 0.0);
        assert_eq!(field.matrix().get(9, 9), 0.0);
    }

    #[test]
    fn region_query_reports_layout_coordinates() {
        let mut rows = vec![vec![0.0; 12]; 12];
        rows[6][5] = 80.0;
        let field =
            TemperatureField::new(TemperatureMatrix::from_rows(&rows).expect("rectangular"));

        let region = RegionSpec::new(10.0, 12.0, 6.0, 6.0, 0.0);
        let spot = query_region(&field, &region, 2.0);
        assert_eq!(spot.value, 80.0);
        assert_eq!((spot.x, spot.y), (10.0, 12.0));
    }
}
