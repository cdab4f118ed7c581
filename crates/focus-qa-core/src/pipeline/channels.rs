//! Channel extraction: splits an image into red, green and blue grids.

use tracing::debug;

use crate::domain::{ChannelGrid, ChannelGrids, FocusError, Result};
use crate::ports::PixelSource;

/// Reads every pixel of `image` into three parallel grids.
///
/// Values are copied verbatim, so `grids.red.get(x, y)` is the red component
/// of the source pixel at `(x, y)`.
///
/// # Errors
///
/// Returns [`FocusError::InvalidImage`] if the image has a zero dimension or
/// a pixel inside its bounds cannot be read.
pub fn extract_channels<P: PixelSource + ?Sized>(image: &P) -> Result<ChannelGrids> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(FocusError::InvalidImage(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let mut red = ChannelGrid::new(width, height);
    let mut green = ChannelGrid::new(width, height);
    let mut blue = ChannelGrid::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let [r, g, b] = image.pixel(x, y).ok_or_else(|| {
                FocusError::InvalidImage(format!("pixel ({x}, {y}) is unreadable"))
            })?;
            red.set(x, y, r);
            green.set(x, y, g);
            blue.set(x, y, b);
        }
    }

    debug!("Extracted {width}x{height} channel grids");
    Ok(ChannelGrids { red, green, blue })
}
