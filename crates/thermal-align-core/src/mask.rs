/// Row-major boolean grid, shaped to match the matrix it masks.
///
/// `true` marks cells inside the region of interest. Out-of-bounds reads
/// return `false`; out-of-bounds writes are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolMask {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl BoolMask {
    /// All-false mask of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, false)
    }

    pub fn filled(width: usize, height: usize, value: bool) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching matrix shape conventions.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    /// Number of cells inside the region.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }
}
