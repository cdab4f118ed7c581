//! Mock implementations of core port traits.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use focus_qa_core::{ChannelGrid, ClassificationResult, PixelSource, VerdictReport};

/// Mock implementation of `PixelSource` backed by three channel grids.
///
/// Individual pixels can be made unreadable to exercise error paths.
pub struct MockPixelSource {
    red: ChannelGrid,
    green: ChannelGrid,
    blue: ChannelGrid,
    unreadable: Vec<(u32, u32)>,
    reads: Arc<Mutex<usize>>,
}

impl MockPixelSource {
    /// Creates a source from per-channel x-major columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns are ragged or the channel shapes differ.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn from_columns<C: AsRef<[u8]>>(red: &[C], green: &[C], blue: &[C]) -> Self {
        let red = ChannelGrid::from_columns(red).expect("red columns");
        let green = ChannelGrid::from_columns(green).expect("green columns");
        let blue = ChannelGrid::from_columns(blue).expect("blue columns");
        assert!(
            red.shape() == green.shape() && red.shape() == blue.shape(),
            "channel shapes differ"
        );
        Self::from_grids(red, green, blue)
    }

    /// Creates a source where every pixel is `rgb`.
    #[must_use]
    pub fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Creates a source by evaluating `f(x, y)` for every pixel.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> Self {
        Self::from_grids(
            ChannelGrid::from_fn(width, height, |x, y| f(x, y)[0]),
            ChannelGrid::from_fn(width, height, |x, y| f(x, y)[1]),
            ChannelGrid::from_fn(width, height, |x, y| f(x, y)[2]),
        )
    }

    fn from_grids(red: ChannelGrid, green: ChannelGrid, blue: ChannelGrid) -> Self {
        Self {
            red,
            green,
            blue,
            unreadable: Vec::new(),
            reads: Arc::new(Mutex::new(0)),
        }
    }

    /// Makes the pixel at `(x, y)` unreadable.
    #[must_use]
    pub fn with_unreadable(mut self, x: u32, y: u32) -> Self {
        self.unreadable.push((x, y));
        self
    }

    /// Returns the number of pixel reads performed so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PixelSource for MockPixelSource {
    fn width(&self) -> u32 {
        self.red.width()
    }

    fn height(&self) -> u32 {
        self.red.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        *self.reads.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        if self.unreadable.contains(&(x, y)) {
            return None;
        }
        Some([
            self.red.get(x, y)?,
            self.green.get(x, y)?,
            self.blue.get(x, y)?,
        ])
    }
}

/// Mock implementation of `VerdictReport` for testing.
///
/// Captures results for later assertions.
#[derive(Default)]
pub struct MockVerdictReport {
    results: Arc<Mutex<Vec<ClassificationResult>>>,
    flush_count: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockVerdictReport {
    /// Creates a new mock report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock report whose `report` always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns all captured results.
    #[must_use]
    pub fn results(&self) -> Vec<ClassificationResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl VerdictReport for MockVerdictReport {
    fn report(&self, result: &ClassificationResult) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("mock report failure");
        }
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*result);
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

/// Cloneable in-memory writer for inspecting report output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far as UTF-8 (lossy).
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
