use crate::error::{Axis, MatrixError, Result};

/// A dense matrix of `f32` values stored row-major in one `Vec`.
///
/// Rows and columns are addressed from 1, so `get(1, 1)` is the upper-left
/// element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "crate::serialize::RawMatrix", try_from = "crate::serialize::RawMatrix")
)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f32>,
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = match rows.checked_mul(cols) {
            Some(len) => len,
            None => panic!("capacity overflow"),
        };
        let data = vec![0.0; len];
        Self { rows, cols, data }
    }

    /// Wraps `data` as a `rows` x `cols` matrix without copying it.
    ///
    /// Fails with [`MatrixError::InvalidArgument`] if `data` does not hold
    /// exactly `rows * cols` values.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        // an overflowing size can never be matched by a real Vec
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if data.len() != expected {
            log::debug!(
                "rejecting {}x{} matrix built from {} values",
                rows,
                cols,
                data.len()
            );
            return Err(MatrixError::InvalidArgument {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates the `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for v in m.data.iter_mut().step_by(n + 1) {
            *v = 1.0;
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The backing values in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Returns the element at row `r`, column `c`.
    pub fn get(&self, r: usize, c: usize) -> Result<f32> {
        let idx = self.index(r, c)?;
        Ok(self.data[idx])
    }

    /// Overwrites the element at row `r`, column `c`.
    pub fn set(&mut self, r: usize, c: usize, value: f32) -> Result<()> {
        let idx = self.index(r, c)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Borrows row `n` as a slice of length `columns()`.
    pub fn row(&self, n: usize) -> Result<&[f32]> {
        let idx = self.row_start(n)?;
        Ok(&self.data[idx..(idx + self.cols)])
    }

    pub fn row_mut(&mut self, n: usize) -> Result<&mut [f32]> {
        let idx = self.row_start(n)?;
        Ok(&mut self.data[idx..(idx + self.cols)])
    }

    /// Copies column `n` into a new `Vec` of length `rows()`.
    pub fn column(&self, n: usize) -> Result<Vec<f32>> {
        check(Axis::Column, n, self.cols)?;
        Ok(self.column_unchecked(n - 1))
    }

    /// Returns a new `columns()` x `rows()` matrix with rows and columns swapped.
    pub fn transpose(&self) -> Self {
        log::trace!("transpose {}x{}", self.rows, self.cols);
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            data.extend(self.column_unchecked(c));
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Multiplies every element by `k` in place.
    pub fn scale(&mut self, k: f32) {
        for v in &mut self.data {
            *v *= k;
        }
    }

    // 0-based column copy, callers have already validated `c`
    pub(crate) fn column_unchecked(&self, c: usize) -> Vec<f32> {
        self.data
            .chunks_exact(self.cols)
            .map(|row| row[c])
            .collect()
    }

    fn row_start(&self, n: usize) -> Result<usize> {
        check(Axis::Row, n, self.rows)?;
        Ok((n - 1) * self.cols)
    }

    /// Maps a 1-based (row, column) pair to its offset in `data`.
    fn index(&self, r: usize, c: usize) -> Result<usize> {
        check(Axis::Row, r, self.rows)?;
        check(Axis::Column, c, self.cols)?;
        Ok((r - 1) * self.cols + (c - 1))
    }
}

fn check(axis: Axis, index: usize, bound: usize) -> Result<()> {
    if index == 0 || index > bound {
        log::debug!("{} index {} outside 1..={}", axis, index, bound);
        return Err(MatrixError::IndexOutOfRange { axis, index, bound });
    }
    Ok(())
}
