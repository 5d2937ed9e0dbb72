use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode an image file, sniffing the format from its content rather than its extension.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissingFile {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let reader = reader.with_guessed_format()?;
    debug!("Decoding {:?} as {:?}", path, reader.format());

    reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}
