use crate::prelude::*;
use std::ops::{Index, IndexMut};

/// A 2-dimensional matrix stored contiguously in row-major order.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

impl<T> Matrix2<T> {
    /// Builds a matrix by calling `f(row, col)` for every entry, row by row.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }

        Self {
            data,
            dim: (rows, cols),
        }
    }

    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }

            for x in row {
                data.push(x);
            }
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// Borrows one row as a contiguous slice.
    pub fn row(&self, row: usize) -> &[T] {
        let cols = self.cols();
        &self.data[row * cols..(row + 1) * cols]
    }

    /// Mutably borrows one row as a contiguous slice.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let cols = self.cols();
        &mut self.data[row * cols..(row + 1) * cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let idx = i * self.cols() + j;
        &mut self.data[idx]
    }
}
