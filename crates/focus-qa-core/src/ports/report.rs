//! Verdict report port for presenting classification results.

use crate::domain::ClassificationResult;

/// Port for reporting classification results.
pub trait VerdictReport: Send + Sync {
    /// Reports a single classification result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn report(&self, result: &ClassificationResult) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
