use tracing::debug;

use crate::error::{Error, Result};
use crate::types::CanvasSize;

/// Top-left offset that centers a `cols x rows` image on the canvas.
/// Integer division; an odd leftover pixel goes to the right/bottom margin.
pub fn center_offsets(cols: u32, rows: u32, canvas: CanvasSize) -> (u32, u32) {
    (
        canvas.width.saturating_sub(cols) / 2,
        canvas.height.saturating_sub(rows) / 2,
    )
}

/// Copy interleaved RGBA8 pixels into the center of a fully transparent canvas.
///
/// Pixels are replaced, not blended, so source alpha is preserved as is.
/// Fails when the image is larger than the canvas or `rgba` is shorter than
/// `cols * rows` pixels.
pub fn pad_to_canvas(rgba: &[u8], cols: u32, rows: u32, canvas: CanvasSize) -> Result<Vec<u8>> {
    if cols > canvas.width || rows > canvas.height {
        return Err(Error::InvalidArgument {
            arg: "image",
            value: format!("{cols}x{rows} does not fit canvas {canvas}"),
        });
    }
    let canvas_len = canvas.rgba_len()?;
    let (pad_cols, pad_rows) = center_offsets(cols, rows, canvas);
    let (cols, rows) = (cols as usize, rows as usize);
    let canvas_cols = canvas.width as usize;
    let row_bytes = cols * 4;
    if rgba.len() < row_bytes * rows {
        return Err(Error::InvalidArgument {
            arg: "image",
            value: format!("{} bytes for {cols}x{rows} RGBA", rgba.len()),
        });
    }

    debug!(
        "Padding {}x{} onto {} at offset ({}, {})",
        cols, rows, canvas, pad_cols, pad_rows
    );

    let mut padded = vec![0u8; canvas_len];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * row_bytes;
        let dst_offset = ((row + pad_rows as usize) * canvas_cols + pad_cols as usize) * 4;
        padded[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&rgba[src_offset..src_offset + row_bytes]);
    }
    Ok(padded)
}
