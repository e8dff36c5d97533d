mod args;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use compass_edges::{
    apply_kernel, detect_compass_edges, ConvolutionError, Direction, KernelError,
};
use thiserror::Error;

use args::Args;
use output::{edge_output_path, is_supported_file_type, write_jpeg};

/// Failures of the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// Only jpg, jpeg, png and bmp inputs are processed
    #[error("File type not supported: {0} (expected JPG, PNG or BMP)")]
    UnsupportedFileType(PathBuf),

    /// Creating the output directory failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Decoding the input or encoding an output image failed
    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// The smoothing parameters do not describe a valid Gaussian kernel
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// A convolution pass rejected its input
    #[error(transparent)]
    Convolution(#[from] ConvolutionError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if !is_supported_file_type(&args.input) {
        return Err(CliError::UnsupportedFileType(args.input.clone()));
    }

    let decoded = image::open(&args.input)?;
    let channels = decoded.color().channel_count();
    let mut image = decoded.to_luma8();
    let (width, height) = image.dimensions();
    log::info!(
        "loaded {}: {width}x{height}, {channels} channel(s)",
        args.input.display()
    );

    if let Some(path) = &args.grayscale_out {
        write_jpeg(path, &image, args.quality)?;
        log::info!("wrote grayscale input to {}", path.display());
    }

    let mut smoothing_total = Duration::ZERO;
    if let Some(params) = args.smoothing()? {
        let start = Instant::now();
        let kernel = params.kernel()?;
        let generation = start.elapsed();

        let start = Instant::now();
        image = apply_kernel(&image, &kernel)?;
        let pass = start.elapsed();

        smoothing_total = generation + pass;
        log::info!(
            "gaussian {size}x{size} sigma={sigma}: mask {generation:?}, pass {pass:?}",
            size = params.size(),
            sigma = params.sigma()
        );
    }

    std::fs::create_dir_all(&args.output_dir).map_err(|source| CliError::Io {
        path: args.output_dir.clone(),
        source,
    })?;

    // smoothing already ran above, the pipeline only runs the eight passes
    let start = Instant::now();
    let edges = detect_compass_edges(&image, None)?;
    let edges_total = start.elapsed();

    for (direction, edge_image) in edges.iter() {
        let path = edge_output_path(&args.output_dir, &args.input, direction);
        write_jpeg(&path, edge_image, args.quality)?;
        log::info!("wrote {}", path.display());
    }

    log::info!(
        "robinson's compass: total {edges_total:?}, average {:?}",
        edges_total / Direction::ALL.len() as u32
    );
    log::info!(
        "robinson's compass + gaussian total: {:?}",
        edges_total + smoothing_total
    );

    Ok(())
}
