use thiserror::Error;

/// Error type for kernel construction
///
/// Kernels are square with an odd side length of at least 3, and the
/// Gaussian generator additionally rejects spreads that would produce a
/// near-degenerate, single-spike kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// The side length is even or smaller than 3
    ///
    /// Only odd sizes have a well defined center cell.
    #[error("Kernel size must be an odd number >= 3, got {size}")]
    InvalidSize { size: usize },

    /// The weight buffer does not hold `size * size` values
    #[error("Kernel data length mismatch: expected {expected} weights, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Gaussian sigma is below the accepted minimum
    #[error("Gaussian sigma must be >= {min}, got {sigma}")]
    SigmaTooSmall { sigma: f64, min: f64 },

    /// Gaussian sigma is NaN or infinite
    #[error("Gaussian sigma must be finite, got {0}")]
    NonFiniteSigma(f64),
}

/// Error type for convolution operations
///
/// This error type covers failures that can occur when applying a kernel
/// to an image, including invalid kernels reaching the engine through the
/// smoothing helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvolutionError {
    /// The image has a zero width or height
    ///
    /// Every pixel of the output needs at least its own sample, so an empty
    /// buffer is rejected instead of silently producing an empty result.
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Failed to create ImageBuffer from processed pixels
    #[error("Failed to create ImageBuffer from processed pixels")]
    ImageBufferCreationFailed,

    /// The kernel could not be constructed
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
