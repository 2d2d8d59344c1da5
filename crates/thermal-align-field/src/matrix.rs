use thiserror::Error;

/// Errors from temperature table ingestion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The table is not rectangular; the data source format is not one this
    /// engine understands. Propagated to the caller unchanged.
    #[error("unsupported temperature table: row {row} has {got} values, expected {expected}")]
    UnsupportedFormat {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Row-major grid of temperature readings, shape `(height, width)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureMatrix {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl TemperatureMatrix {
    /// Build from parsed table rows, validating that every row has the same
    /// length. File parsing itself is a collaborator's concern.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, FieldError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(FieldError::UnsupportedFormat {
                    row: i,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height: rows.len(),
            data,
        })
    }

    /// All-zero matrix of the given dimensions.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        if x < self.width && y < self.height {
            self.data[y * self.width + x] = value;
        }
    }

    /// Maximum over the whole grid, or the 0 sentinel for an empty one.
    pub fn global_max(&self) -> f64 {
        self.data
            .iter()
            .copied()
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular_rows_load() {
        let m = TemperatureMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .expect("load");
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(2, 1), 6.0);
        assert_eq!(m.global_max(), 6.0);
    }

    #[test]
    fn ragged_rows_are_an_unsupported_format() {
        let err = TemperatureMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            FieldError::UnsupportedFormat {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn empty_table_is_a_zero_by_zero_matrix() {
        let m = TemperatureMatrix::from_rows(&[]).expect("load");
        assert_eq!(m.shape(), (0, 0));
        assert_eq!(m.global_max(), 0.0);
    }

    #[test]
    fn out_of_bounds_reads_are_zero() {
        let m = TemperatureMatrix::from_rows(&[vec![7.0]]).expect("load");
        assert_eq!(m.get(5, 5), 0.0);
    }
}
