//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;
use compass_edges::{GaussianParams, KernelError, MIN_SIGMA};

/// Robinson's Compass edge detection on a grayscale copy of an image
#[derive(Parser, Debug)]
#[command(name = "compass_edges")]
#[command(version, about = "Robinson's Compass edge detection", long_about = None)]
pub struct Args {
    /// Input image (jpg, jpeg, png or bmp)
    pub input: PathBuf,

    /// Directory receiving the eight <stem>_<DIR>.jpg edge images
    #[arg(short, long, default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Smooth the image with a Gaussian kernel before edge detection
    #[arg(long)]
    pub smooth: bool,

    /// Gaussian mask size (odd number >= 3)
    #[arg(long, default_value = "5", value_parser = parse_mask_size, requires = "smooth")]
    pub mask_size: usize,

    /// Gaussian sigma (>= 0.3)
    #[arg(long, default_value = "1.0", value_parser = parse_sigma, requires = "smooth")]
    pub sigma: f64,

    /// JPEG quality of the written edge images (1-100)
    #[arg(short, long, default_value = "100", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Also write the decoded grayscale input to this path
    #[arg(long)]
    pub grayscale_out: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Smoothing parameters when `--smooth` is set
    pub fn smoothing(&self) -> Result<Option<GaussianParams>, KernelError> {
        if !self.smooth {
            return Ok(None);
        }
        GaussianParams::new(self.mask_size, self.sigma).map(Some)
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Parse and validate the Gaussian mask size (odd, >= 3)
fn parse_mask_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid mask size", s))?;
    if size < 3 || size % 2 == 0 {
        return Err(format!("Mask size must be an odd number >= 3, got {}", size));
    }
    Ok(size)
}

/// Parse and validate the Gaussian sigma (>= 0.3)
fn parse_sigma(s: &str) -> Result<f64, String> {
    let sigma: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !sigma.is_finite() || sigma < MIN_SIGMA {
        return Err(format!("Sigma must be a number >= {}, got {}", MIN_SIGMA, sigma));
    }
    Ok(sigma)
}
