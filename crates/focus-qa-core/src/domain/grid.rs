//! Per-channel intensity grids and the flattened luminance signal.

use super::error::{FocusError, Result};

/// A 2-D grid of 8-bit intensities for one colour channel, indexed `[x, y]`.
///
/// Storage is x-major (`index = x * height + y`), which is also the order the
/// luminance step flattens in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ChannelGrid {
    /// Creates a zero-filled grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; cell_count(width, height)],
        }
    }

    /// Creates a grid by evaluating `f(x, y)` for every cell.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut data = Vec::with_capacity(cell_count(width, height));
        for x in 0..width {
            for y in 0..height {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Builds a grid from x-major columns: `columns[x][y]`.
    ///
    /// # Errors
    ///
    /// Returns [`FocusError::InvalidImage`] if the columns are ragged.
    pub fn from_columns<C: AsRef<[u8]>>(columns: &[C]) -> Result<Self> {
        let height = columns.first().map_or(0, |c| c.as_ref().len());
        if let Some((x, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.as_ref().len() != height)
        {
            return Err(FocusError::InvalidImage(format!(
                "column {x} has {} value(s), expected {height}",
                col.as_ref().len()
            )));
        }

        let width = u32::try_from(columns.len())
            .map_err(|_| FocusError::InvalidImage("too many columns".into()))?;
        let height = u32::try_from(height)
            .map_err(|_| FocusError::InvalidImage("column too long".into()))?;
        let data = columns.iter().flat_map(|c| c.as_ref().iter().copied()).collect();

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width (extent of `x`).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (extent of `y`).
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Shape as `(width, height)`.
    #[must_use]
    pub const fn shape(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Value at `(x, y)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Overwrites the value at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// Backing values in x-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| x as usize * self.height as usize + y as usize)
    }
}

fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// The red, green and blue grids extracted from one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelGrids {
    /// Red intensities.
    pub red: ChannelGrid,
    /// Green intensities.
    pub green: ChannelGrid,
    /// Blue intensities.
    pub blue: ChannelGrid,
}

/// Flattened luminance signal, x-major then y-minor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LuminanceSequence(Vec<f64>);

impl LuminanceSequence {
    /// Wraps already-flattened luminance values.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the sequence, returning its samples.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for LuminanceSequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for LuminanceSequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
