//! Input checks, output naming and JPEG encoding.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use compass_edges::{Direction, Image};
use image::codecs::jpeg::JpegEncoder;
use image::Luma;

use crate::CliError;

/// Extensions accepted as input, compared case-insensitively
const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// Whether the path names a jpg, jpeg, png or bmp file
pub fn is_supported_file_type(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// `<output_dir>/<input stem>_<DIR>.jpg`
pub fn edge_output_path(output_dir: &Path, input: &Path, direction: Direction) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    output_dir.join(format!("{}_{}.jpg", stem, direction.suffix()))
}

/// Writes a grayscale image as JPEG at the given quality.
pub fn write_jpeg(path: &Path, image: &Image<Luma<u8>>, quality: u8) -> Result<(), CliError> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    image.write_with_encoder(encoder)?;
    Ok(())
}
