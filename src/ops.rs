use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Returns the product `a * b`.
///
/// Element (r, c) of the result is the dot product of row r of `a` with
/// column c of `b`. Fails with [`MatrixError::DimensionMismatch`] unless
/// `a.columns() == b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.cols != b.rows {
        return Err(mismatch("multiply", a, b));
    }
    log::trace!(
        "multiply {}x{} by {}x{}",
        a.rows,
        a.cols,
        b.rows,
        b.cols
    );

    let mut c = Matrix::zeros(a.rows, b.cols);
    // an empty inner dimension sums nothing
    if a.cols == 0 || b.cols == 0 {
        return Ok(c);
    }
    // columns of b laid out contiguously
    let bt = b.transpose();
    for (a_row, c_row) in a.data.chunks_exact(a.cols).zip(c.data.chunks_exact_mut(c.cols)) {
        for (b_col, out) in bt.data.chunks_exact(bt.cols).zip(c_row) {
            *out = dot(a_row, b_col);
        }
    }
    Ok(c)
}

/// Returns the element-wise sum `a + b`.
///
/// Fails with [`MatrixError::DimensionMismatch`] unless both operands have
/// the same shape.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.shape() != b.shape() {
        return Err(mismatch("add", a, b));
    }
    log::trace!("add {}x{}", a.rows, a.cols);

    let data = a.data.iter().zip(&b.data).map(|(x, y)| x + y).collect();
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols,
        data,
    })
}

impl Matrix {
    /// Same as [`multiply`]`(self, other)`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        multiply(self, other)
    }

    /// Same as [`add`]`(self, other)`.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        add(self, other)
    }
}

// sums from +0.0 so an all-zero product never prints as -0
fn dot(x: &[f32], y: &[f32]) -> f32 {
    x.iter().zip(y).fold(0.0, |acc, (xi, yi)| acc + xi * yi)
}

fn mismatch(op: &'static str, a: &Matrix, b: &Matrix) -> MatrixError {
    log::debug!(
        "{} rejected: {}x{} and {}x{}",
        op,
        a.rows,
        a.cols,
        b.rows,
        b.cols
    );
    MatrixError::DimensionMismatch {
        op,
        left: a.shape(),
        right: b.shape(),
    }
}
