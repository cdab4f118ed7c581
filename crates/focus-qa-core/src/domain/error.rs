//! Failure modes of the focus pipeline.

use thiserror::Error;

/// Errors raised by the focus pipeline.
///
/// All variants are fatal for the image being analyzed; nothing in the
/// pipeline retries or substitutes a default verdict.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// The source image has a zero dimension or a pixel that cannot be read.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The channel grids handed to the luminance step disagree in shape.
    #[error("channel grids differ in shape: red {red:?}, green {green:?}, blue {blue:?}")]
    ShapeMismatch {
        /// Red grid shape as (width, height).
        red: (u32, u32),
        /// Green grid shape as (width, height).
        green: (u32, u32),
        /// Blue grid shape as (width, height).
        blue: (u32, u32),
    },

    /// Too few samples to form a convolution window or a sample variance.
    #[error("insufficient data: {what} has {len} element(s), more than {min} required")]
    InsufficientData {
        /// Which sequence was too short.
        what: &'static str,
        /// Its actual length.
        len: usize,
        /// The length it must exceed.
        min: usize,
    },
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, FocusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = FocusError::ShapeMismatch {
            red: (4, 4),
            green: (4, 3),
            blue: (4, 4),
        };
        assert_eq!(
            err.to_string(),
            "channel grids differ in shape: red (4, 4), green (4, 3), blue (4, 4)"
        );
    }

    #[test]
    fn test_insufficient_data_message() {
        let err = FocusError::InsufficientData {
            what: "luminance sequence",
            len: 9,
            min: 9,
        };
        assert!(err.to_string().contains("luminance sequence has 9 element(s)"));
    }
}
