//! Verdict report adapters.

mod json;
mod text;

pub use json::JsonReport;
pub use text::TextReport;

use anyhow::{anyhow, Result};
use std::io::Write;
use std::sync::Mutex;

/// Line-oriented writer shared by the report adapters.
struct SharedWriter(Mutex<Box<dyn Write + Send>>);

impl SharedWriter {
    fn new(writer: Box<dyn Write + Send>) -> Self {
        Self(Mutex::new(writer))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.0.lock().map_err(|e| anyhow!("Lock poisoned: {e}"))?;
        writeln!(writer, "{line}")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self.0.lock().map_err(|e| anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
