use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, info};

use crate::error::Result;
use crate::types::{CanvasSize, ResizeFilter};

/// Scaled dimensions of a source image fitted into a canvas
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FitDimensions {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

/// Shrink-only fit: scale = min(w / src_w, h / src_h, 1.0), dimensions floored.
///
/// The limiting axis lands exactly on the canvas edge; the other axis is computed
/// with integer arithmetic so no float rounding can push it past the bounds. Each
/// dimension is at least one pixel. Sources with a zero dimension are returned as is.
pub fn fit_dimensions(source_width: u32, source_height: u32, canvas: CanvasSize) -> FitDimensions {
    let (sw, sh) = (source_width as u64, source_height as u64);
    let (cw, ch) = (canvas.width as u64, canvas.height as u64);

    if sw == 0 || sh == 0 || (sw <= cw && sh <= ch) {
        return FitDimensions {
            width: source_width,
            height: source_height,
            scale: 1.0,
        };
    }

    // cw / sw <= ch / sh  <=>  cw * sh <= ch * sw
    if cw * sh <= ch * sw {
        let height = (sh * cw / sw).max(1) as u32;
        FitDimensions {
            width: canvas.width,
            height,
            scale: cw as f64 / sw as f64,
        }
    } else {
        let width = (sw * ch / sh).max(1) as u32;
        FitDimensions {
            width,
            height: canvas.height,
            scale: ch as f64 / sh as f64,
        }
    }
}

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Box => ResizeAlg::Convolution(FilterType::Box),
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resample interleaved RGBA8 pixels. Alpha is premultiplied during convolution
/// so transparent edges do not bleed dark fringes.
pub fn resize_rgba_image(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResizeFilter,
) -> Result<Vec<u8>> {
    if original_cols == target_cols && original_rows == target_rows {
        debug!("Source already at target dimensions, skipping resample");
        return Ok(data);
    }

    let resize_options = ResizeOptions::new()
        .resize_alg(resize_alg(filter))
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    info!(
        "Resampled {}x{} -> {}x{} ({})",
        original_cols, original_rows, target_cols, target_rows, filter
    );
    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn canvas(w: u32, h: u32) -> CanvasSize {
        CanvasSize { width: w, height: h }
    }

    #[test]
    fn wide_source_shrinks_by_half() {
        let fit = fit_dimensions(1000, 400, canvas(500, 500));
        assert_eq!((fit.width, fit.height), (500, 200));
        assert_eq!(fit.scale, 0.5);
    }

    #[test]
    fn small_source_is_never_upscaled() {
        let fit = fit_dimensions(200, 200, canvas(500, 500));
        assert_eq!((fit.width, fit.height), (200, 200));
        assert_eq!(fit.scale, 1.0);
    }

    #[test]
    fn tall_source_limited_by_height() {
        let fit = fit_dimensions(300, 900, canvas(500, 300));
        assert_eq!((fit.width, fit.height), (100, 300));
    }

    #[test]
    fn thirds_do_not_round_down_the_limiting_axis() {
        let fit = fit_dimensions(300, 150, canvas(100, 100));
        assert_eq!((fit.width, fit.height), (100, 50));
    }

    #[test]
    fn floors_the_free_axis() {
        // 333 * 500 / 1000 = 166.5
        let fit = fit_dimensions(1000, 333, canvas(500, 500));
        assert_eq!((fit.width, fit.height), (500, 166));
    }

    #[test]
    fn sliver_keeps_one_pixel() {
        let fit = fit_dimensions(10_000, 1, canvas(100, 100));
        assert_eq!((fit.width, fit.height), (100, 1));
    }

    #[test]
    fn one_axis_over_bounds_still_shrinks() {
        let fit = fit_dimensions(600, 100, canvas(500, 500));
        assert_eq!((fit.width, fit.height), (500, 83));
    }

    #[test]
    fn resample_produces_target_buffer() {
        let src: Vec<u8> = [200u8, 100, 50, 255].repeat(8 * 4);
        let out = resize_rgba_image(src, 8, 4, 4, 2, ResizeFilter::Lanczos3).unwrap();
        assert_eq!(out.len(), 4 * 2 * 4);
        for px in out.chunks_exact(4) {
            assert!(px[0].abs_diff(200) <= 1);
            assert!(px[1].abs_diff(100) <= 1);
            assert!(px[2].abs_diff(50) <= 1);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn resample_same_size_returns_input() {
        let src: Vec<u8> = (0..16).collect();
        let out = resize_rgba_image(src.clone(), 2, 2, 2, 2, ResizeFilter::Nearest).unwrap();
        assert_eq!(out, src);
    }

    // PROPERTY TESTS ################################################

    fn clamp_dim(v: u16) -> u32 {
        (v as u32 % 4000) + 1
    }

    #[quickcheck]
    fn fit_stays_within_canvas(sw: u16, sh: u16, cw: u16, ch: u16) -> bool {
        let c = canvas(clamp_dim(cw), clamp_dim(ch));
        let fit = fit_dimensions(clamp_dim(sw), clamp_dim(sh), c);
        fit.width >= 1 && fit.height >= 1 && fit.width <= c.width && fit.height <= c.height
    }

    #[quickcheck]
    fn fit_never_upscales(sw: u16, sh: u16, cw: u16, ch: u16) -> bool {
        let (sw, sh) = (clamp_dim(sw), clamp_dim(sh));
        let fit = fit_dimensions(sw, sh, canvas(clamp_dim(cw), clamp_dim(ch)));
        fit.width <= sw && fit.height <= sh && fit.scale <= 1.0
    }

    #[quickcheck]
    fn fit_preserves_aspect_within_a_pixel(sw: u16, sh: u16, cw: u16, ch: u16) -> bool {
        let c = canvas(clamp_dim(cw), clamp_dim(ch));
        let (sw, sh) = (clamp_dim(sw) as f64, clamp_dim(sh) as f64);
        let fit = fit_dimensions(sw as u32, sh as u32, c);
        // The limiting axis sits on the canvas edge; the other one carries the rounding
        if fit.width == c.width {
            let expected_height = fit.width as f64 * sh / sw;
            (fit.height as f64 - expected_height).abs() <= 1.0
        } else {
            let expected_width = fit.height as f64 * sw / sh;
            (fit.width as f64 - expected_width).abs() <= 1.0
        }
    }
}
