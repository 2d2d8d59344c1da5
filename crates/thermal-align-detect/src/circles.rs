use serde::{Deserialize, Serialize};

use crate::hough::HoughCircleParams;

/// One detected circular marker, integer-rounded as the detector reports it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

/// The two marker sizes the captures use. Thermal captures carry small
/// stickers; the layout capture uses larger printed rings, and a larger
/// minimum radius there keeps small vias from being picked up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerClass {
    Small,
    Large,
}

impl MarkerClass {
    pub fn params(self) -> HoughCircleParams {
        match self {
            MarkerClass::Small => HoughCircleParams::default(),
            MarkerClass::Large => HoughCircleParams {
                blur_kernel: 11,
                min_radius: 13,
                ..HoughCircleParams::default()
            },
        }
    }
}

/// First circle, in detection order, whose radius covers the point.
///
/// Deliberately not the nearest match: overlapping circles resolve to
/// whichever the detector listed first. Callers that need nearest-center
/// semantics must sort the list themselves before calling.
pub fn circle_containing(circles: &[Circle], px: f64, py: f64) -> Option<Circle> {
    circles.iter().copied().find(|c| {
        let dx = px - c.x as f64;
        let dy = py - c.y as f64;
        (dx * dx + dy * dy).sqrt() <= c.r as f64
    })
}
