use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use thermal_align_core::{rasterize_polygon, BoolMask};

use crate::matrix::TemperatureMatrix;

/// A region query result: the maximum reading and where it sits, reported in
/// the caller's (scaled) coordinate space. The empty-region sentinel is all
/// zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Query surface over a loaded temperature matrix.
///
/// Region coordinates arrive in a display space `scale` times larger than
/// the matrix; queries divide by the scale, truncate, and clamp into the
/// grid. Out-of-range coordinates are never an error, and an empty
/// intersection yields the 0 / `(0, 0)` sentinel. The single mutation,
/// [`crop_to_mask`](Self::crop_to_mask), takes the field exclusively so the
/// borrow checker sequences it before any shared read.
#[derive(Clone, Debug)]
pub struct TemperatureField {
    matrix: TemperatureMatrix,
}

impl TemperatureField {
    pub fn new(matrix: TemperatureMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &TemperatureMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> TemperatureMatrix {
        self.matrix
    }

    /// Clamp one display-space box into half-open matrix bounds. Each
    /// coordinate clamps against its own axis, independent of which corner
    /// it came from; an inverted box simply comes back empty.
    fn clamp_box(&self, x1: f64, y1: f64, x2: f64, y2: f64, scale: f64) -> BoxBounds {
        let w = self.matrix.width() as i64;
        let h = self.matrix.height() as i64;
        let clamp = |v: f64, max: i64| ((v / scale).trunc() as i64).clamp(0, max) as usize;
        BoxBounds {
            x1: clamp(x1, w),
            y1: clamp(y1, h),
            x2: clamp(x2, w),
            y2: clamp(y2, h),
        }
    }

    /// Maximum reading inside an axis-aligned box, or 0 when the clamped box
    /// is empty.
    pub fn max_in_box(&self, x1: f64, y1: f64, x2: f64, y2: f64, scale: f64) -> f64 {
        self.fold_box(self.clamp_box(x1, y1, x2, y2, scale)).value
    }

    /// Like [`max_in_box`](Self::max_in_box), but also reports where the
    /// maximum sits, scaled back into the caller's coordinates.
    pub fn hotspot_in_box(&self, x1: f64, y1: f64, x2: f64, y2: f64, scale: f64) -> Hotspot {
        let found = self.fold_box(self.clamp_box(x1, y1, x2, y2, scale));
        Hotspot {
            value: found.value,
            x: found.x * scale,
            y: found.y * scale,
        }
    }

    fn fold_box(&self, b: BoxBounds) -> Hotspot {
        let mut best: Option<(f64, usize, usize)> = None;
        for y in b.y1..b.y2 {
            for x in b.x1..b.x2 {
                let v = self.matrix.get(x, y);
                if best.map_or(true, |(max, _, _)| v > max) {
                    best = Some((v, x, y));
                }
            }
        }
        match best {
            Some((value, x, y)) => Hotspot {
                value,
                x: x as f64,
                y: y as f64,
            },
            None => Hotspot::default(),
        }
    }

    /// Maximum reading inside a circle. Cells qualify when their center's
    /// distance to the circle center is within the radius.
    pub fn max_in_circle(&self, cx: f64, cy: f64, radius: f64, scale: f64) -> f64 {
        self.fold_circle(cx, cy, radius, scale).value
    }

    pub fn hotspot_in_circle(&self, cx: f64, cy: f64, radius: f64, scale: f64) -> Hotspot {
        let found = self.fold_circle(cx, cy, radius, scale);
        Hotspot {
            value: found.value,
            x: found.x * scale,
            y: found.y * scale,
        }
    }

    fn fold_circle(&self, cx: f64, cy: f64, radius: f64, scale: f64) -> Hotspot {
        let b = self.clamp_box(cx - radius, cy - radius, cx + radius, cy + radius, scale);
        let center_x = cx / scale;
        let center_y = cy / scale;
        let r = radius / scale;

        let mut best: Option<(f64, usize, usize)> = None;
        for y in b.y1..b.y2 {
            for x in b.x1..b.x2 {
                let dx = x as f64 - center_x;
                let dy = y as f64 - center_y;
                if (dx * dx + dy * dy).sqrt() > r {
                    continue;
                }
                let v = self.matrix.get(x, y);
                if best.map_or(true, |(max, _, _)| v > max) {
                    best = Some((v, x, y));
                }
            }
        }
        match best {
            Some((value, x, y)) => Hotspot {
                value,
                x: x as f64,
                y: y as f64,
            },
            None => Hotspot::default(),
        }
    }

    /// Maximum reading inside a (possibly rotated) polygon, via a rasterized
    /// mask of the matrix's shape.
    pub fn max_in_polygon(&self, corners: &[Point2<f64>], scale: f64) -> f64 {
        self.fold_polygon(corners, scale).value
    }

    pub fn hotspot_in_polygon(&self, corners: &[Point2<f64>], scale: f64) -> Hotspot {
        let found = self.fold_polygon(corners, scale);
        Hotspot {
            value: found.value,
            x: found.x * scale,
            y: found.y * scale,
        }
    }

    fn fold_polygon(&self, corners: &[Point2<f64>], scale: f64) -> Hotspot {
        let matrix_corners: Vec<Point2<f64>> = corners
            .iter()
            .map(|p| Point2::new(p.x / scale, p.y / scale))
            .collect();
        let mask = rasterize_polygon(&matrix_corners, self.matrix.shape());

        let mut best: Option<(f64, usize, usize)> = None;
        for y in 0..self.matrix.height() {
            for x in 0..self.matrix.width() {
                if !mask.get(x, y) {
                    continue;
                }
                let v = self.matrix.get(x, y);
                if best.map_or(true, |(max, _, _)| v > max) {
                    best = Some((v, x, y));
                }
            }
        }
        match best {
            Some((value, x, y)) => Hotspot {
                value,
                x: x as f64,
                y: y as f64,
            },
            None => Hotspot::default(),
        }
    }

    /// Zero every cell the mask excludes.
    ///
    /// The one destructive operation on a field: run once after boundary
    /// detection, before the field is shared for queries. A mask of the
    /// wrong shape is refused and leaves the matrix untouched.
    pub fn crop_to_mask(&mut self, mask: &BoolMask) {
        if mask.shape() != self.matrix.shape() {
            log::warn!(
                "crop mask shape {:?} does not match field shape {:?}, skipping",
                mask.shape(),
                self.matrix.shape()
            );
            return;
        }
        for y in 0..self.matrix.height() {
            for x in 0..self.matrix.width() {
                if !mask.get(x, y) {
                    self.matrix.set(x, y, 0.0);
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
struct BoxBounds {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermal_align_core::rotated_corners;

    fn gradient_field(width: usize, height: usize) -> TemperatureField {
        // Readings rise toward the bottom-right corner.
        let rows: Vec<Vec<f64>> = (0..height)
            .map(|y| (0..width).map(|x| (y * width + x) as f64).collect())
            .collect();
        TemperatureField::new(TemperatureMatrix::from_rows(&rows).expect("rectangular"))
    }

    #[test]
    fn zero_area_boxes_hit_the_sentinel() {
        let field = gradient_field(8, 6);
        assert_eq!(field.max_in_box(3.0, 1.0, 3.0, 5.0, 1.0), 0.0);
        assert_eq!(field.max_in_box(1.0, 4.0, 6.0, 4.0, 1.0), 0.0);
        assert_eq!(
            field.hotspot_in_box(3.0, 1.0, 3.0, 5.0, 1.0),
            Hotspot::default()
        );
    }

    #[test]
    fn inverted_boxes_come_back_empty() {
        let field = gradient_field(8, 6);
        assert_eq!(field.max_in_box(6.0, 5.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn wildly_out_of_range_boxes_clamp_to_the_full_matrix() {
        let field = gradient_field(8, 6);
        assert_eq!(
            field.max_in_box(-100.0, -100.0, 100_000.0, 100_000.0, 1.0),
            field.matrix().global_max()
        );
    }

    #[test]
    fn scale_divides_incoming_coordinates() {
        let field = gradient_field(8, 6);
        // A display-space box (0,0)-(4,4) at scale 2 covers matrix cells
        // (0,0)-(2,2); the maximum there is cell (1,1) = 9.
        assert_eq!(field.max_in_box(0.0, 0.0, 4.0, 4.0, 2.0), 9.0);
    }

    #[test]
    fn hotspot_positions_are_scaled_back() {
        let field = gradient_field(8, 6);
        let spot = field.hotspot_in_box(0.0, 0.0, 8.0, 12.0, 2.0);
        // Clamped matrix box is (0,0)-(4,6); max is at (3,5) = 43.
        assert_eq!(spot.value, 43.0);
        assert_eq!((spot.x, spot.y), (6.0, 10.0));
    }

    #[test]
    fn circle_query_excludes_bounding_box_corners() {
        let mut rows = vec![vec![0.0; 21]; 21];
        rows[10][10] = 50.0; // inside the radius
        rows[2][2] = 90.0; // in the bounding box, outside the radius
        let field = TemperatureField::new(TemperatureMatrix::from_rows(&rows).expect("load"));

        assert_eq!(field.max_in_circle(10.0, 10.0, 9.0, 1.0), 50.0);
        let spot = field.hotspot_in_circle(10.0, 10.0, 9.0, 1.0);
        assert_eq!((spot.x, spot.y), (10.0, 10.0));
    }

    #[test]
    fn circle_fully_outside_hits_the_sentinel() {
        let field = gradient_field(8, 6);
        assert_eq!(field.max_in_circle(-50.0, -50.0, 3.0, 1.0), 0.0);
    }

    #[test]
    fn rotated_polygon_query_finds_the_planted_maximum() {
        let mut rows = vec![vec![1.0; 30]; 30];
        rows[15][14] = 99.0;
        let field = TemperatureField::new(TemperatureMatrix::from_rows(&rows).expect("load"));

        let corners = rotated_corners(15.0, 15.0, 8.0, 4.0, 30.0);
        assert_eq!(field.max_in_polygon(&corners, 1.0), 99.0);
        let spot = field.hotspot_in_polygon(&corners, 1.0);
        assert_eq!((spot.x, spot.y), (14.0, 15.0));
    }

    #[test]
    fn polygon_outside_the_matrix_hits_the_sentinel() {
        let field = gradient_field(8, 6);
        let corners = rotated_corners(500.0, 500.0, 10.0, 10.0, 0.0);
        assert_eq!(field.max_in_polygon(&corners, 1.0), 0.0);
        assert_eq!(field.hotspot_in_polygon(&corners, 1.0), Hotspot::default());
    }

    #[test]
    fn crop_zeroes_only_excluded_cells() {
        let mut field = gradient_field(4, 4);
        let mut keep = BoolMask::new(4, 4);
        keep.set(1, 1, true);
        keep.set(2, 2, true);
        field.crop_to_mask(&keep);

        assert_eq!(field.matrix().get(1, 1), 5.0);
        assert_eq!(field.matrix().get(2, 2), 10.0);
        assert_eq!(field.matrix().get(3, 3), 0.0);
        assert_eq!(field.matrix().get(0, 0), 0.0);
    }

    #[test]
    fn mismatched_crop_mask_is_refused() {
        let mut field = gradient_field(4, 4);
        let before = field.matrix().clone();
        field.crop_to_mask(&BoolMask::new(3, 3));
        assert_eq!(field.matrix(), &before);
    }
}
