use image::{DynamicImage, RgbaImage};
use tracing::{info, warn};

use crate::core::processing::padding::{center_offsets, pad_to_canvas};
use crate::core::processing::resize::{fit_dimensions, resize_rgba_image};
use crate::error::{Error, Result};
use crate::types::{CanvasSize, ResizeFilter};

/// Where and how large a source image ended up on its canvas
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Placement {
    pub source_width: u32,
    pub source_height: u32,
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// A composited canvas together with its placement
#[derive(Debug, Clone)]
pub struct FittedImage {
    pub canvas: RgbaImage,
    pub placement: Placement,
}

/// Shrink-only fit of `source` into a transparent `size` canvas, centered.
pub fn fit_to_canvas(
    source: &DynamicImage,
    size: CanvasSize,
    filter: ResizeFilter,
) -> Result<FittedImage> {
    size.validate()?;

    let rgba = source.to_rgba8();
    let (cols, rows) = rgba.dimensions();
    let fit = fit_dimensions(cols, rows, size);

    if cols == 0 || rows == 0 {
        warn!("Source image is empty ({}x{}), canvas left blank", cols, rows);
        return Ok(FittedImage {
            canvas: RgbaImage::new(size.width, size.height),
            placement: Placement {
                source_width: cols,
                source_height: rows,
                scale: 1.0,
                scaled_width: 0,
                scaled_height: 0,
                offset_x: size.width / 2,
                offset_y: size.height / 2,
            },
        });
    }

    info!(
        "Original size: {}x{}, New size: {}x{} (scale {:.4})",
        cols, rows, fit.width, fit.height, fit.scale
    );

    let scaled = resize_rgba_image(rgba.into_raw(), cols, rows, fit.width, fit.height, filter)?;
    let (offset_x, offset_y) = center_offsets(fit.width, fit.height, size);
    let padded = pad_to_canvas(&scaled, fit.width, fit.height, size)?;

    let canvas = RgbaImage::from_raw(size.width, size.height, padded).ok_or(
        Error::InvalidArgument {
            arg: "canvas",
            value: size.to_string(),
        },
    )?;

    Ok(FittedImage {
        canvas,
        placement: Placement {
            source_width: cols,
            source_height: rows,
            scale: fit.scale,
            scaled_width: fit.width,
            scaled_height: fit.height,
            offset_x,
            offset_y,
        },
    })
}
