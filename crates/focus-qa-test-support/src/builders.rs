//! Synthetic image builders for testing.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// Builder for creating synthetic test images.
///
/// Images come back as `DynamicImage` so they can be fed to the pipeline
/// through the raster adapters or saved as fixtures.
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    // === Uniform Images ===

    /// Creates an image where every pixel is `(r, g, b)`.
    ///
    /// Every filter response is zero, so this is always blurry/dark.
    #[must_use]
    pub fn rgb_uniform(width: u32, height: u32, r: u8, g: u8, b: u8) -> DynamicImage {
        let img = RgbImage::from_pixel(width, height, Rgb([r, g, b]));
        DynamicImage::ImageRgb8(img)
    }

    /// Creates a uniform grey image.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    // === Outliers ===

    /// Creates a black image with one pixel set to `(r, g, b)`.
    #[must_use]
    pub fn single_outlier(width: u32, height: u32, at: (u32, u32), rgb: [u8; 3]) -> DynamicImage {
        let mut img = RgbImage::new(width, height);
        if at.0 < width && at.1 < height {
            img.put_pixel(at.0, at.1, Rgb(rgb));
        }
        DynamicImage::ImageRgb8(img)
    }

    // === High-Contrast Images ===

    /// Creates a high-contrast checkerboard with the given cell size.
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell_size: u32) -> DynamicImage {
        let cell = cell_size.max(1);
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        DynamicImage::ImageLuma8(img)
    }

    /// Creates horizontal bars, alternating every `bar_height` rows.
    ///
    /// Flattening walks each column top to bottom, so these bars become
    /// rapid alternation in the luminance signal.
    #[must_use]
    pub fn horizontal_bars(width: u32, height: u32, bar_height: u32) -> DynamicImage {
        let bar = bar_height.max(1);
        let img = GrayImage::from_fn(width, height, |_, y| {
            if (y / bar) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        DynamicImage::ImageLuma8(img)
    }

    // === Smooth Images ===

    /// Creates a smooth horizontal gradient.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> DynamicImage {
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Luma([val])
        });
        DynamicImage::ImageLuma8(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_uniform() {
        let img = SyntheticImageBuilder::rgb_uniform(10, 10, 255, 0, 128);
        let rgb = img.to_rgb8();
        assert!(rgb.pixels().all(|p| p.0 == [255, 0, 128]));
    }

    #[test]
    fn test_single_outlier() {
        let img = SyntheticImageBuilder::single_outlier(4, 4, (0, 3), [255, 255, 255]);
        let rgb = img.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 3).0, [255, 255, 255]);
        assert_eq!(rgb.pixels().filter(|p| p.0 != [0, 0, 0]).count(), 1);
    }

    #[test]
    fn test_single_outlier_out_of_bounds_is_black() {
        let img = SyntheticImageBuilder::single_outlier(2, 2, (5, 5), [1, 2, 3]);
        assert!(img.to_rgb8().pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_checkerboard_pattern() {
        let luma = SyntheticImageBuilder::checkerboard(16, 16, 8).to_luma8();
        assert_eq!(luma.get_pixel(0, 0).0[0], 255);
        assert_eq!(luma.get_pixel(8, 0).0[0], 0);
        assert_eq!(luma.get_pixel(8, 8).0[0], 255);
    }

    #[test]
    fn test_horizontal_bars() {
        let luma = SyntheticImageBuilder::horizontal_bars(4, 4, 1).to_luma8();
        assert_eq!(luma.get_pixel(3, 0).0[0], 255);
        assert_eq!(luma.get_pixel(3, 1).0[0], 0);
    }

    #[test]
    fn test_gradient_range() {
        let luma = SyntheticImageBuilder::horizontal_gradient(256, 10).to_luma8();
        assert!(luma.get_pixel(0, 0).0[0] < 5);
        assert!(luma.get_pixel(255, 0).0[0] > 250);
    }
}
