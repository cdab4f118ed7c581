//! JSON verdict report.

use anyhow::Result;
use focus_qa_core::{ClassificationResult, VerdictReport};
use std::io::{self, Write};

use super::SharedWriter;

/// JSON Lines report: one result object per line.
pub struct JsonReport {
    writer: SharedWriter,
}

impl JsonReport {
    /// Creates a JSON report writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a JSON report writing to the given writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: SharedWriter::new(writer),
        }
    }

    /// Writes a batch of results as a single JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_array(&self, results: &[ClassificationResult], pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        self.writer.write_line(&json)
    }
}

impl VerdictReport for JsonReport {
    fn report(&self, result: &ClassificationResult) -> Result<()> {
        self.writer.write_line(&serde_json::to_string(result)?)
    }

    fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}
