use std::fmt;

use thiserror::Error;

/// Coordinate axis named in construction errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis { X, Y }

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors that can occur when constructing a `Claim`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// The rectangle does not span at least two grid units along `axis`.
    #[error("degenerate claim: {axis}1 ({min}) must be less than {axis}2 ({max})")]
    Degenerate { axis: Axis, min: i64, max: i64 },
}
