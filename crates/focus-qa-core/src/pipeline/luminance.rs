//! Luminance conversion: collapses the colour grids into one flat signal.

use tracing::debug;

use crate::domain::{ChannelGrid, ChannelGrids, FocusError, LuminanceSequence, Result};

/// Perceptual weight of the red channel.
pub const RED_WEIGHT: f64 = 0.2989;
/// Perceptual weight of the green channel.
pub const GREEN_WEIGHT: f64 = 0.5870;
/// Perceptual weight of the blue channel.
pub const BLUE_WEIGHT: f64 = 0.1140;

/// Weighted luminance of one pixel. No rounding or clamping is applied.
#[must_use]
pub fn pixel_luminance(red: u8, green: u8, blue: u8) -> f64 {
    RED_WEIGHT * f64::from(red) + GREEN_WEIGHT * f64::from(green) + BLUE_WEIGHT * f64::from(blue)
}

/// Combines three equally shaped grids into a luminance sequence.
///
/// The output has `width * height` samples in x-major, y-minor order: all
/// `y` for `x = 0`, then all `y` for `x = 1`, and so on.
///
/// # Errors
///
/// Returns [`FocusError::ShapeMismatch`] if the grids differ in width or height.
pub fn to_luminance(
    red: &ChannelGrid,
    green: &ChannelGrid,
    blue: &ChannelGrid,
) -> Result<LuminanceSequence> {
    if red.shape() != green.shape() || red.shape() != blue.shape() {
        return Err(FocusError::ShapeMismatch {
            red: red.shape(),
            green: green.shape(),
            blue: blue.shape(),
        });
    }

    // Grids are stored x-major, so zipping the backing slices flattens in order.
    let sequence: LuminanceSequence = red
        .as_slice()
        .iter()
        .zip(green.as_slice())
        .zip(blue.as_slice())
        .map(|((&r, &g), &b)| pixel_luminance(r, g, b))
        .collect();

    debug!(
        "Converted {}x{} grids to {} luminance samples",
        red.width(),
        red.height(),
        sequence.len()
    );
    Ok(sequence)
}

impl ChannelGrids {
    /// Converts these grids to a luminance sequence.
    ///
    /// # Errors
    ///
    /// See [`to_luminance`].
    pub fn to_luminance(&self) -> Result<LuminanceSequence> {
        to_luminance(&self.red, &self.green, &self.blue)
    }
}
