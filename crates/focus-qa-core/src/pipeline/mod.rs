//! The focus pipeline: image → channel grids → luminance → verdict.
//!
//! Each stage consumes the previous stage's output once; nothing is shared
//! between stages or between calls.

mod channels;
mod focus;
mod luminance;

pub use channels::extract_channels;
pub use focus::{
    classify, convolve, focus_metric, sample_variance, FocusClassifier, DEFAULT_FOCUS_THRESHOLD,
    FILTER_KERNEL, KERNEL_LEN,
};
pub use luminance::{pixel_luminance, to_luminance, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};

use anyhow::Context;

use crate::domain::{ClassificationResult, Result};
use crate::ports::{PixelSource, VerdictReport};

impl FocusClassifier {
    /// Runs the whole pipeline on `image`.
    ///
    /// # Errors
    ///
    /// Propagates the first failing stage's [`FocusError`](crate::FocusError).
    pub fn analyze<P: PixelSource + ?Sized>(&self, image: &P) -> Result<ClassificationResult> {
        let luminance = extract_channels(image)?.to_luminance()?;
        self.classify(&luminance)
    }
}

/// Classifies `image` against `threshold`.
///
/// # Errors
///
/// Propagates the first failing stage's [`FocusError`](crate::FocusError).
pub fn detect<P: PixelSource + ?Sized>(image: &P, threshold: f64) -> Result<ClassificationResult> {
    FocusClassifier::new(threshold).analyze(image)
}

/// Classifies `image` and hands the result to `report`.
///
/// The result is returned as well, so callers can act on it after reporting.
///
/// # Errors
///
/// Returns an error if classification fails (nothing is reported then) or
/// if the report cannot be written.
pub fn detect_and_report<P: PixelSource + ?Sized>(
    image: &P,
    classifier: &FocusClassifier,
    report: &dyn VerdictReport,
) -> anyhow::Result<ClassificationResult> {
    let result = classifier.analyze(image)?;
    report
        .report(&result)
        .context("Failed to report classification result")?;
    Ok(result)
}
