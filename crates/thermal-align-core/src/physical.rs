use serde::{Deserialize, Serialize};

use crate::origin::OriginCorner;

/// Padding between the layout-image border and the board outline, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgePadding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// How physical board millimetres map onto layout-capture pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalFrameParams {
    pub image_width: f64,
    pub image_height: f64,
    pub padding: EdgePadding,
    pub board_width_mm: f64,
    pub board_height_mm: f64,
    /// Corner the design's drill origin sits in.
    pub origin: OriginCorner,
    /// Pixel offset of the drill origin relative to the padded corner.
    pub origin_offset: [f64; 2],
}

impl Default for PhysicalFrameParams {
    fn default() -> Self {
        Self {
            image_width: 1280.0,
            image_height: 960.0,
            padding: EdgePadding::default(),
            board_width_mm: 100.0,
            board_height_mm: 80.0,
            origin: OriginCorner::BottomLeft,
            origin_offset: [0.0, 0.0],
        }
    }
}

/// Resolved mm -> px affine for one layout capture.
///
/// The per-origin parameter table collapses into a base offset plus a signed
/// pixels-per-mm scale per axis, applied uniformly for all four origins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalFrame {
    base_x: f64,
    base_y: f64,
    px_per_mm_x: f64,
    px_per_mm_y: f64,
}

impl PhysicalFrame {
    pub fn new(params: &PhysicalFrameParams) -> Self {
        let effective_w = params.image_width - params.padding.left - params.padding.right;
        let effective_h = params.image_height - params.padding.top - params.padding.bottom;
        if params.board_width_mm <= 0.0 || params.board_height_mm <= 0.0 {
            log::warn!(
                "non-positive board size {}x{}mm, pixels-per-mm will be unusable",
                params.board_width_mm,
                params.board_height_mm
            );
        }
        let ppm_x = effective_w / params.board_width_mm;
        let ppm_y = effective_h / params.board_height_mm;
        let [off_x, off_y] = params.origin_offset;

        let (base_x, px_per_mm_x) = match params.origin {
            OriginCorner::TopLeft | OriginCorner::BottomLeft => {
                (params.padding.left + off_x, ppm_x)
            }
            OriginCorner::TopRight | OriginCorner::BottomRight => {
                (params.image_width - params.padding.right - off_x, -ppm_x)
            }
        };
        let (base_y, px_per_mm_y) = match params.origin {
            OriginCorner::TopLeft | OriginCorner::TopRight => (params.padding.top + off_y, ppm_y),
            OriginCorner::BottomLeft | OriginCorner::BottomRight => {
                (params.image_height - params.padding.bottom - off_y, -ppm_y)
            }
        };

        Self {
            base_x,
            base_y,
            px_per_mm_x,
            px_per_mm_y,
        }
    }

    /// Map a physical point (mm) into layout pixels.
    pub fn mm_to_px(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        (
            self.base_x + x_mm * self.px_per_mm_x,
            self.base_y + y_mm * self.px_per_mm_y,
        )
    }

    /// Map a physical rectangle, returning pixel bounds ordered as
    /// `(left, top, right, bottom)` regardless of axis direction.
    pub fn rect_to_px(&self, left: f64, top: f64, right: f64, bottom: f64) -> (f64, f64, f64, f64) {
        let (ax, ay) = self.mm_to_px(left, top);
        let (bx, by) = self.mm_to_px(right, bottom);
        (ax.min(bx), ay.min(by), ax.max(bx), ay.max(by))
    }
}
