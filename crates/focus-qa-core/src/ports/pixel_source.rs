//! Pixel source port: the image the pipeline reads from.

/// Read-only access to an RGB image addressed by `(x, y)`.
///
/// Implementations are supplied by an image-decoding collaborator; the
/// pipeline never mutates them.
pub trait PixelSource {
    /// Image width in pixels.
    fn width(&self) -> u32;

    /// Image height in pixels.
    fn height(&self) -> u32;

    /// Red, green and blue components at `(x, y)`.
    ///
    /// Returns `None` when the pixel cannot be read.
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]>;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        (**self).pixel(x, y)
    }
}
