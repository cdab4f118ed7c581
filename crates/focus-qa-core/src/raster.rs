//! `PixelSource` adapters for decoded `image` crate buffers.
//!
//! Decoding and file access stay with the caller; these wrappers only expose
//! already-decoded pixels to the focus pipeline.

use crate::ports::PixelSource;
use image::{DynamicImage, GenericImageView, Pixel, RgbImage, RgbaImage};

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.get_pixel_checked(x, y).map(|p| p.0)
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.get_pixel_checked(x, y).map(|p| p.to_rgb().0)
    }
}

/// Any `DynamicImage` variant, converted per pixel to 8-bit RGB.
///
/// Alpha is dropped and wider sample types are narrowed the same way
/// `DynamicImage::to_rgb8` does.
impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.in_bounds(x, y)
            .then(|| self.get_pixel(x, y).to_rgb().0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, Rgba};

    #[test]
    fn test_rgb_image_pixels() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([10 * x as u8, 20 * y as u8, 7]));
        assert_eq!(PixelSource::width(&img), 3);
        assert_eq!(PixelSource::height(&img), 2);
        assert_eq!(img.pixel(2, 1), Some([20, 20, 7]));
        assert_eq!(img.pixel(3, 0), None);
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 0]));
        assert_eq!(img.pixel(1, 1), Some([1, 2, 3]));
    }

    #[test]
    fn test_dynamic_gray_expands_to_rgb() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([90])));
        assert_eq!(img.pixel(0, 1), Some([90, 90, 90]));
        assert_eq!(img.pixel(0, 2), None);
    }
}
