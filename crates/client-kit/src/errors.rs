//! # Client helper errors
use thiserror::Error;

/// Errors produced while parsing or manipulating colors.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ColorError {
    /// A percentage fell outside of `0.0..=1.0`.
    #[error("Percentage {0} is outside of the range 0.0 to 1.0")]
    InvalidPercentage(f32),

    /// A hexadecimal color string had the wrong number of digits.
    #[error("Invalid hexadecimal length of {0}, expected 3 or 6")]
    InvalidHexLength(usize),

    /// A hexadecimal color string contained something other than hex digits.
    #[error("Malformed hexadecimal string {0:?}")]
    MalformedHex(String),

    /// An integer color did not fit in 24 bits.
    #[error("Expected an unsigned 24-bit integer, got {0:#x}")]
    InvalidUInt24(u32),

    /// A gradient was requested over an empty list of colors.
    #[error("Cannot interpolate a gradient with no colors")]
    EmptyGradient,
}

/// Common result type for color operations.
pub type ColorResult<V> = Result<V, ColorError>;
