//! Test utilities for compass-edges
//!
//! This module provides common functionality for testing kernel application.
//! It is only compiled when running tests.

use image::Luma;

use crate::Image;

/// Creates a grayscale image where every sample has the same value.
pub fn create_uniform_luma_image(width: u32, height: u32, value: u8) -> Image<Luma<u8>> {
    Image::from_pixel(width, height, Luma([value]))
}

/// Creates a grayscale image numbered row by row starting at 1.
///
/// A 3x3 image looks like:
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
/// Values wrap after 255.
pub fn create_sequential_luma_image(width: u32, height: u32) -> Image<Luma<u8>> {
    Image::from_fn(width, height, |x, y| {
        Luma([((y * width + x + 1) % 256) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_uniform_luma_image_fills_every_pixel() {
        let image = create_uniform_luma_image(4, 2, 77);
        assert_eq!(image.dimensions(), (4, 2));
        assert!(image.pixels().all(|p| p[0] == 77));
    }

    #[test]
    fn create_sequential_luma_image_numbers_row_major() {
        let image = create_sequential_luma_image(3, 3);
        assert_eq!(image.as_raw(), &vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let wide = create_sequential_luma_image(300, 1);
        assert_eq!(wide.get_pixel(255, 0)[0], 0);
        assert_eq!(wide.get_pixel(256, 0)[0], 1);
    }
}
