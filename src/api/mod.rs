//! High-level, ergonomic library API: fit a single image in memory or to disk,
//! and run a whole batch described by `BatchParams`. Prefer these entrypoints
//! over the low-level processing modules when integrating assetfit.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::params::BatchParams;
use crate::core::processing::pipeline::{FittedImage, Placement, fit_to_canvas};
use crate::error::{Error, Result};
use crate::io::reader::decode_image;
use crate::io::writers::png::write_rgba_png;
use crate::types::{CanvasSize, ResizeFilter};

/// Outputs of a batch that ran to completion, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub outputs: Vec<PathBuf>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.outputs.len()
    }
}

/// `output_dir / basename(input)`
pub fn output_path_for(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: input.display().to_string(),
    })?;
    Ok(output_dir.join(name))
}

/// Decode `input` and fit it onto a transparent canvas (no disk writes)
pub fn process_image_to_buffer(
    input: &Path,
    size: CanvasSize,
    filter: ResizeFilter,
) -> Result<FittedImage> {
    let source = decode_image(input)?;
    fit_to_canvas(&source, size, filter)
}

/// Decode, fit and write one image as PNG to `output`
pub fn process_image_to_path(
    input: &Path,
    output: &Path,
    size: CanvasSize,
    filter: ResizeFilter,
) -> Result<Placement> {
    let fitted = process_image_to_buffer(input, size, filter)?;
    write_rgba_png(output, &fitted.canvas)?;
    debug!(
        "Placed {}x{} at ({}, {})",
        fitted.placement.scaled_width,
        fitted.placement.scaled_height,
        fitted.placement.offset_x,
        fitted.placement.offset_y
    );
    Ok(fitted.placement)
}

/// Process every input of `params` in order.
///
/// The first failure aborts the batch and is returned as is; outputs already
/// written for earlier inputs stay on disk. Existing files are overwritten.
pub fn process_batch(params: &BatchParams) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(&params.output_dir)?;

    info!(
        "Starting batch of {} images -> {:?} (canvas {}, filter {})",
        params.inputs.len(),
        params.output_dir,
        params.size,
        params.filter
    );

    let mut outputs = Vec::with_capacity(params.inputs.len());
    for input in &params.inputs {
        let output = output_path_for(input, &params.output_dir)?;
        info!("Processing: {:?} -> {:?}", input, output);
        process_image_to_path(input, &output, params.size, params.filter)?;
        outputs.push(output);
    }

    info!("Batch complete: {} images", outputs.len());
    Ok(BatchReport {
        output_dir: params.output_dir.clone(),
        outputs,
    })
}
