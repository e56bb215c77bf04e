use crate::matrix::Matrix;
use std::fmt;

/// Renders the matrix as `[a, b, c,\n d, e, f]`.
///
/// Values use the shortest decimal that reads back to the same `f32`,
/// unless a precision is given (`{:.2}`), which is applied to every value.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                if i % self.cols == 0 {
                    f.write_str(",\n ")?;
                } else {
                    f.write_str(", ")?;
                }
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v)?,
                None => write!(f, "{}", v)?,
            }
        }
        f.write_str("]")
    }
}
