use serde::{Deserialize, Serialize};

/// Which board corner a coordinate is measured from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Board dimensions used to re-express points between corner origins.
///
/// Every conversion pivots through the top-left frame. The per-corner maps
/// are involutive, so the same formula converts in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OriginFrame {
    pub width: f64,
    pub height: f64,
}

impl OriginFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn to_top_left(&self, x: f64, y: f64, origin: OriginCorner) -> (f64, f64) {
        match origin {
            OriginCorner::TopLeft => (x, y),
            OriginCorner::TopRight => (self.width - x, y),
            OriginCorner::BottomLeft => (x, self.height - y),
            OriginCorner::BottomRight => (self.width - x, self.height - y),
        }
    }

    /// Re-express `(x, y)` measured from `from` as measured from `to`.
    pub fn convert(&self, x: f64, y: f64, from: OriginCorner, to: OriginCorner) -> (f64, f64) {
        if from == to {
            return (x, y);
        }
        let (tx, ty) = self.to_top_left(x, y, from);
        // Leaving top-left uses the same involutive map as entering it.
        self.to_top_left(tx, ty, to)
    }

    pub fn convert_batch(
        &self,
        points: &[(f64, f64)],
        from: OriginCorner,
        to: OriginCorner,
    ) -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|&(x, y)| self.convert(x, y, from, to))
            .collect()
    }
}
