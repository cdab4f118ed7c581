//! Plain-text verdict report.

use anyhow::Result;
use focus_qa_core::{ClassificationResult, VerdictReport};
use std::io::{self, Write};
use tracing::debug;

use super::SharedWriter;

/// Writes one `blurry/dark: YES|NO` line per result.
pub struct TextReport {
    writer: SharedWriter,
    show_metric: bool,
}

impl TextReport {
    /// Creates a text report writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a text report writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: SharedWriter::new(writer),
            show_metric: false,
        }
    }

    /// Appends the focus metric and threshold to each line.
    #[must_use]
    pub const fn with_metric(mut self, show_metric: bool) -> Self {
        self.show_metric = show_metric;
        self
    }

    fn format_line(&self, result: &ClassificationResult) -> String {
        if self.show_metric {
            format!(
                "{result} (focus metric {:.2}, threshold {})",
                result.focus_metric, result.threshold
            )
        } else {
            result.to_string()
        }
    }
}

impl VerdictReport for TextReport {
    fn report(&self, result: &ClassificationResult) -> Result<()> {
        self.writer.write_line(&self.format_line(result))?;
        debug!("Reported verdict {}", result.verdict_label());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}
