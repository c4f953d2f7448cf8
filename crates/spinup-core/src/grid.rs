//! Elementwise numeric grids with explicit scalar broadcast.
//!
//! [`Grid`] is the dense numeric carrier for sweep evaluations. Elementwise
//! binary operations require matching shapes, with one exception: a 1x1 grid
//! broadcasts against any shape. Any other shape combination is a caller
//! error ([`GridError::ShapeMismatch`]), never silently recycled.

use std::ops::Index;

use nalgebra::DMatrix;

use crate::error::GridError;

/// Dense two-dimensional `f64` grid.
///
/// Construction guarantees at least one element, so reductions like
/// [`Grid::min`] are total.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid(DMatrix<f64>);

impl Grid {
    /// 1x1 grid holding a single value. Broadcasts against any shape.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self(DMatrix::from_element(1, 1, value))
    }

    /// Build from row-major data.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if data.len() != rows * cols {
            return Err(GridError::DataLength {
                len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Self(DMatrix::from_row_slice(rows, cols, &data)))
    }

    /// Coordinate grids over a row axis and a column axis.
    ///
    /// Returns `(row_grid, col_grid)` of shape `row_axis.len() x
    /// col_axis.len()`, where `row_grid[(r, c)] = row_axis[r]` and
    /// `col_grid[(r, c)] = col_axis[c]`.
    pub fn meshgrid(row_axis: &[f64], col_axis: &[f64]) -> Result<(Self, Self), GridError> {
        if row_axis.is_empty() || col_axis.is_empty() {
            return Err(GridError::Empty);
        }
        let rows = row_axis.len();
        let cols = col_axis.len();
        let row_grid = Self(DMatrix::from_fn(rows, cols, |r, _| row_axis[r]));
        let col_grid = Self(DMatrix::from_fn(rows, cols, |_, c| col_axis[c]));
        Ok((row_grid, col_grid))
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.0.nrows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.0.ncols()
    }

    /// Whether this grid is a broadcastable 1x1 scalar.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.0.shape() == (1, 1)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: empty grids cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all elements (order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    /// Elementwise unary map.
    #[must_use]
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    /// Elementwise binary combination with scalar broadcast.
    ///
    /// Shapes must match, or one operand must be 1x1.
    pub fn zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Self, GridError> {
        if self.is_scalar() && !other.is_scalar() {
            let v = self.0[(0, 0)];
            return Ok(Self(other.0.map(|x| f(v, x))));
        }
        if other.is_scalar() && !self.is_scalar() {
            let v = other.0[(0, 0)];
            return Ok(Self(self.0.map(|x| f(x, v))));
        }
        if self.shape() != other.shape() {
            let (left_rows, left_cols) = self.shape();
            let (right_rows, right_cols) = other.shape();
            return Err(GridError::ShapeMismatch {
                left_rows,
                left_cols,
                right_rows,
                right_cols,
            });
        }
        Ok(Self(self.0.zip_map(&other.0, f)))
    }

    /// Smallest element.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.iter().fold(f64::INFINITY, f64::min)
    }

    /// Largest element.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.iter().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Row-major copy, one `Vec` per row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.0[(r, c)]).collect())
            .collect()
    }
}

impl From<f64> for Grid {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
