//! Complex sample arrays

use num_complex::Complex64;

use crate::error::{Result, SpinsolveError};

/// Two-dimensional array of complex FID samples
///
/// Elements are stored column-major: index `(i, j)` lives at `i + j * rows`.
/// A one-dimensional experiment has shape `(n, 1)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleArray {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl SampleArray {
    /// Wrap a flat list of samples as an `(n, 1)` array
    pub fn from_vec_1d(data: Vec<Complex64>) -> Self {
        Self {
            rows: data.len(),
            cols: 1,
            data,
        }
    }

    /// Build an array from column-major data
    ///
    /// Fails with [`SpinsolveError::ShapeMismatch`] unless `rows * cols == data.len()`.
    pub fn from_column_major(shape: (usize, usize), data: Vec<Complex64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(SpinsolveError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True for single-column arrays
    pub fn is_one_dimensional(&self) -> bool {
        self.cols == 1
    }

    /// Sample at row `i`, column `j`
    pub fn get(&self, i: usize, j: usize) -> Option<Complex64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        self.data.get(i + j * self.rows).copied()
    }

    /// Contiguous column `j`
    pub fn column(&self, j: usize) -> Option<&[Complex64]> {
        if j >= self.cols {
            return None;
        }
        let start = j * self.rows;
        self.data.get(start..start + self.rows)
    }

    /// Samples in storage (column-major) order
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }
}

impl From<Vec<Complex64>> for SampleArray {
    fn from(data: Vec<Complex64>) -> Self {
        Self::from_vec_1d(data)
    }
}

impl<'a> IntoIterator for &'a SampleArray {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_vec_1d_shape() {
        let arr = SampleArray::from_vec_1d(vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        assert_eq!(arr.shape(), (3, 1));
        assert!(arr.is_one_dimensional());
        assert_eq!(arr.get(2, 0), Some(c(3.0, 0.0)));
        assert_eq!(arr.get(3, 0), None);
        assert_eq!(arr.get(0, 1), None);
    }

    #[test]
    fn test_column_major_indexing() {
        // 2 rows x 3 cols, first index fastest
        let data: Vec<_> = (0..6).map(|k| c(k as f64, 0.0)).collect();
        let arr = SampleArray::from_column_major((2, 3), data).unwrap();

        assert_eq!(arr.get(0, 0), Some(c(0.0, 0.0)));
        assert_eq!(arr.get(1, 0), Some(c(1.0, 0.0)));
        assert_eq!(arr.get(0, 1), Some(c(2.0, 0.0)));
        assert_eq!(arr.get(1, 2), Some(c(5.0, 0.0)));
        assert_eq!(arr.column(1), Some(&[c(2.0, 0.0), c(3.0, 0.0)][..]));
        assert_eq!(arr.column(3), None);
    }

    #[test]
    fn test_shape_mismatch() {
        let result = SampleArray::from_column_major((2, 2), vec![c(0.0, 0.0); 3]);
        assert!(matches!(
            result,
            Err(SpinsolveError::ShapeMismatch {
                rows: 2,
                cols: 2,
                len: 3
            })
        ));
    }

    #[test]
    fn test_empty_array() {
        let arr = SampleArray::default();
        assert!(arr.is_empty());
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.iter().count(), 0);
    }
}
