//! Structural errors.
//!
//! Both kinds are caller bugs. Operations that cannot return a `Result` panic
//! with the error's display text instead.

use thiserror::Error;

use crate::Float;

/// Error produced when geometric operands are malformed.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GeomError {
    /// Operands have different numbers of dimensions.
    #[error("dimension mismatch: expected {expected} dimensions but got {actual}")]
    DimensionMismatch {
        /// Number of dimensions of the left-hand operand.
        expected: usize,
        /// Number of dimensions of the right-hand operand.
        actual: usize,
    },
    /// Lower bound is greater than the upper bound along some axis.
    ///
    /// This also covers NaN bounds, which are never ordered.
    #[error("invalid interval along axis {axis}: min {min} is not less than or equal to max {max}")]
    InvalidInterval {
        /// Axis along which the interval is invalid.
        axis: usize,
        /// Lower bound.
        min: Float,
        /// Upper bound.
        max: Float,
    },
}
