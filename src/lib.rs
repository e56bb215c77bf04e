#![doc = include_str!("../README.md")]

mod error;
mod format;
mod matrix;
mod ops;
#[cfg(feature = "serde")]
mod serialize;

pub use error::{Axis, MatrixError, Result};
pub use matrix::Matrix;
pub use ops::{add, multiply};
