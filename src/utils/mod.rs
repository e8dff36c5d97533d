//! Internal utility functions for compass-edges.
//!
//! This module contains common functionality used across the engine and the pipeline.

use image::Primitive;
use imageproc::definitions::Clamp;

use crate::error::ConvolutionError;

/// Clamps a floating-point value to the range of a primitive type.
///
/// Values inside the range are truncated toward zero.
#[inline]
pub fn clamp_f64_to_primitive<T: Primitive + Clamp<f64>>(value: f64) -> T {
    T::clamp(value)
}

/// Validates that an image has non-zero dimensions.
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `ConvolutionError::EmptyImage`
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), ConvolutionError> {
    if width == 0 || height == 0 {
        Err(ConvolutionError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}
