use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::rotation::{point_in_polygon, rotated_anchors, rotated_corners};

/// A possibly rotated rectangular query region, defined in a single
/// coordinate space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub cx: f64,
    pub cy: f64,
    pub half_w: f64,
    pub half_h: f64,
    /// Counter-clockwise as a viewer reads it, degrees; taken modulo 360.
    #[serde(default)]
    pub angle_deg: f64,
    /// Optional component label carried through configuration stores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Accessor keys for [`RegionSpec::value`], the typed replacement for a
/// get-field-by-name lookup. The derived bounds are those of the unrotated
/// rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionField {
    CenterX,
    CenterY,
    HalfWidth,
    HalfHeight,
    AngleDeg,
    X1,
    Y1,
    X2,
    Y2,
}

impl RegionSpec {
    pub fn new(cx: f64, cy: f64, half_w: f64, half_h: f64, angle_deg: f64) -> Self {
        Self {
            cx,
            cy,
            half_w,
            half_h,
            angle_deg,
            label: None,
        }
    }

    /// Axis-aligned region from its bounding coordinates.
    pub fn from_bounds(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(
            (x1 + x2) / 2.0,
            (y1 + y2) / 2.0,
            (x2 - x1) / 2.0,
            (y2 - y1) / 2.0,
            0.0,
        )
    }

    /// Rotation angle normalized into `[0, 360)`.
    pub fn angle(&self) -> f64 {
        self.angle_deg.rem_euclid(360.0)
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.angle() == 0.0
    }

    /// Corner positions, order TL, TR, BR, BL.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        rotated_corners(self.cx, self.cy, self.half_w, self.half_h, self.angle())
    }

    /// Interactive anchor positions in the fixed 8-slot order.
    pub fn anchors(&self) -> [Point2<f64>; 8] {
        rotated_anchors(self.cx, self.cy, self.half_w, self.half_h, self.angle())
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        point_in_polygon(px, py, &self.corners())
    }

    /// Keyed numeric lookup preserved for serialization collaborators.
    pub fn value(&self, field: RegionField) -> f64 {
        match field {
            RegionField::CenterX => self.cx,
            RegionField::CenterY => self.cy,
            RegionField::HalfWidth => self.half_w,
            RegionField::HalfHeight => self.half_h,
            RegionField::AngleDeg => self.angle(),
            RegionField::X1 => self.cx - self.half_w,
            RegionField::Y1 => self.cy - self.half_h,
            RegionField::X2 => self.cx + self.half_w,
            RegionField::Y2 => self.cy + self.half_h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_wraps_modulo_360() {
        let region = RegionSpec::new(0.0, 0.0, 10.0, 5.0, 405.0);
        assert_eq!(region.angle(), 45.0);
        assert_eq!(RegionSpec::new(0.0, 0.0, 1.0, 1.0, -90.0).angle(), 270.0);
        assert!(RegionSpec::new(0.0, 0.0, 1.0, 1.0, 720.0).is_axis_aligned());
    }

    #[test]
    fn value_lookup_covers_derived_bounds() {
        let region = RegionSpec::new(100.0, 80.0, 30.0, 20.0, 15.0);
        assert_eq!(region.value(RegionField::CenterX), 100.0);
        assert_eq!(region.value(RegionField::X1), 70.0);
        assert_eq!(region.value(RegionField::Y1), 60.0);
        assert_eq!(region.value(RegionField::X2), 130.0);
        assert_eq!(region.value(RegionField::Y2), 100.0);
        assert_eq!(region.value(RegionField::AngleDeg), 15.0);
    }

    #[test]
    fn region_round_trips_through_json() {
        let mut region = RegionSpec::new(10.0, 20.0, 5.0, 2.5, 30.0);
        region.label = Some("U7".to_string());
        let json = serde_json::to_string(&region).expect("serialize");
        let back: RegionSpec = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, region);
    }

    #[test]
    fn contains_respects_rotation() {
        let region = RegionSpec::new(0.0, 0.0, 10.0, 1.0, 90.0);
        // A thin bar rotated a quarter turn covers points along the Y axis.
        assert!(region.contains(0.0, 8.0));
        assert!(!region.contains(8.0, 0.0));
    }
}
