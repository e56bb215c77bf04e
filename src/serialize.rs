//! `serde` support, enabled by the `serde` feature.
//!
//! A matrix is written as `{ "rows": .., "columns": .., "data": [..] }`.
//! Reading it back goes through [`Matrix::from_vec`], so a payload whose
//! data length disagrees with its shape is rejected.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub(crate) struct RawMatrix {
    rows: usize,
    columns: usize,
    data: Vec<f32>,
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        Self {
            rows: m.rows,
            columns: m.cols,
            data: m.data,
        }
    }
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        Matrix::from_vec(raw.rows, raw.columns, raw.data)
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn test_to_json() {
        let m = Matrix::from_vec(1, 2, vec![1.5, 2.0]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"rows":1,"columns":2,"data":[1.5,2.0]}"#);
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_from_json_wrong_length() {
        let err = serde_json::from_str::<Matrix>(r#"{"rows":2,"columns":2,"data":[1.0]}"#)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("invalid argument: expected 4 values, found 1"));
    }
}
