//! Classification result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of classifying one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Sample variance of the filtered luminance signal.
    pub focus_metric: f64,
    /// `true` when the image is classified as blurry/dark.
    pub is_blurry: bool,
    /// Threshold the metric was compared against.
    pub threshold: f64,
}

impl ClassificationResult {
    /// Derives the verdict from a metric: blurry/dark iff `focus_metric < threshold`.
    #[must_use]
    pub fn from_metric(focus_metric: f64, threshold: f64) -> Self {
        Self {
            focus_metric,
            is_blurry: focus_metric < threshold,
            threshold,
        }
    }

    /// `"YES"` for blurry/dark, `"NO"` otherwise.
    #[must_use]
    pub const fn verdict_label(&self) -> &'static str {
        if self.is_blurry {
            "YES"
        } else {
            "NO"
        }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blurry/dark: {}", self.verdict_label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_below_threshold_is_blurry() {
        assert!(ClassificationResult::from_metric(2999.9, 3000.0).is_blurry);
    }

    #[test]
    fn test_equal_to_threshold_is_not_blurry() {
        let result = ClassificationResult::from_metric(3000.0, 3000.0);
        assert!(!result.is_blurry);
        assert_eq!(result.verdict_label(), "NO");
    }

    #[test]
    fn test_display() {
        let blurry = ClassificationResult::from_metric(0.0, 3000.0);
        let sharp = ClassificationResult::from_metric(5000.0, 3000.0);
        assert_eq!(blurry.to_string(), "blurry/dark: YES");
        assert_eq!(sharp.to_string(), "blurry/dark: NO");
    }

    #[test]
    fn test_serializes_snake_case() {
        let result = ClassificationResult::from_metric(12.5, 3000.0);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["focus_metric"], 12.5);
        assert_eq!(json["is_blurry"], true);
        assert_eq!(json["threshold"], 3000.0);
    }
}
