//! Focus classification.
//!
//! Slides a fixed 9-tap kernel over the flattened luminance signal, takes the
//! sample variance of the responses as the focus metric, and compares it
//! against a threshold. The taps are applied to 9 consecutive flattened
//! samples, which usually straddle several image columns; this is not a
//! spatial 3x3 neighbourhood.

use tracing::debug;

use crate::domain::{ClassificationResult, FocusError, LuminanceSequence, Result};

/// Threshold used when the caller does not supply one.
pub const DEFAULT_FOCUS_THRESHOLD: f64 = 3000.0;

/// Laplacian-shaped filter taps. They sum to zero.
pub const FILTER_KERNEL: [f64; 9] = [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];

/// Number of taps in [`FILTER_KERNEL`].
pub const KERNEL_LEN: usize = FILTER_KERNEL.len();

/// Sliding dot product of [`FILTER_KERNEL`] over `luminance`.
///
/// Element `i` of the output is the dot product with `luminance[i..i + 9]`
/// for `i` in `0..len - 9`, so the output has `len - 9` elements and the last
/// sample never enters a window.
///
/// # Errors
///
/// Returns [`FocusError::InsufficientData`] if `luminance` has 9 or fewer samples.
pub fn convolve(luminance: &[f64]) -> Result<Vec<f64>> {
    if luminance.len() <= KERNEL_LEN {
        return Err(FocusError::InsufficientData {
            what: "luminance sequence",
            len: luminance.len(),
            min: KERNEL_LEN,
        });
    }

    Ok(luminance[..luminance.len() - 1]
        .windows(KERNEL_LEN)
        .map(|window| {
            window
                .iter()
                .zip(FILTER_KERNEL.iter())
                .map(|(sample, tap)| sample * tap)
                .sum::<f64>()
        })
        .collect())
}

/// Sample variance (divides by `n - 1`). `None` for fewer than two values.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_of_squares: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some(sum_of_squares / (n - 1.0))
}

/// Computes the focus metric of a luminance sequence.
///
/// # Errors
///
/// Returns [`FocusError::InsufficientData`] if the sequence has 9 or fewer
/// samples, or exactly 10 (one filter response has no sample variance).
pub fn focus_metric(luminance: &LuminanceSequence) -> Result<f64> {
    let responses = convolve(luminance.as_slice())?;
    let metric = sample_variance(&responses).ok_or(FocusError::InsufficientData {
        what: "convolution sequence",
        len: responses.len(),
        min: 1,
    })?;

    debug!(
        "Focus metric {metric:.3} from {} filter responses",
        responses.len()
    );
    Ok(metric)
}

/// Classifies a luminance sequence against `threshold`.
///
/// The image is blurry/dark iff the focus metric is strictly below the
/// threshold.
///
/// # Errors
///
/// See [`focus_metric`].
pub fn classify(luminance: &LuminanceSequence, threshold: f64) -> Result<ClassificationResult> {
    let metric = focus_metric(luminance)?;
    Ok(ClassificationResult::from_metric(metric, threshold))
}

/// Focus classifier bound to a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusClassifier {
    threshold: f64,
}

impl FocusClassifier {
    /// Creates a classifier comparing against `threshold`.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classifies a luminance sequence.
    ///
    /// # Errors
    ///
    /// See [`focus_metric`].
    pub fn classify(&self, luminance: &LuminanceSequence) -> Result<ClassificationResult> {
        classify(luminance, self.threshold)
    }
}

impl Default for FocusClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_THRESHOLD)
    }
}
