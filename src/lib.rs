#![doc = r#"
assetfit — fit game asset images onto a uniform transparent canvas.

Every source image is shrunk (never enlarged) to fit within the canvas while
keeping its aspect ratio, centered on a fully transparent RGBA background and
written out as PNG under its original file name. It powers the `assetfit` CLI
and can be embedded in your own build tooling.

Quick start: run a built-in preset
----------------------------------
```rust,no_run
use assetfit::{BatchParams, Category, process_batch};

fn main() -> assetfit::Result<()> {
    let report = process_batch(&BatchParams::for_category(Category::Enemies))?;
    println!("Resizing complete. Images saved to: {}", report.output_dir.display());
    Ok(())
}
```

Custom batch
------------
```rust,no_run
use std::path::PathBuf;
use assetfit::{BatchParams, CanvasSize, ResizeFilter, process_batch};

fn main() -> assetfit::Result<()> {
    let params = BatchParams {
        inputs: vec![PathBuf::from("icons/sword.png"), PathBuf::from("icons/shield.png")],
        output_dir: PathBuf::from("icons/64"),
        size: CanvasSize::square(64)?,
        filter: ResizeFilter::CatmullRom,
    };
    let report = process_batch(&params)?;
    assert_eq!(report.processed(), 2);
    Ok(())
}
```

In-memory
---------
```rust
use assetfit::{CanvasSize, ResizeFilter, fit_to_canvas};
use image::{DynamicImage, Rgba, RgbaImage};

let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1000, 400, Rgba([255, 0, 0, 255])));
let fitted = fit_to_canvas(&source, CanvasSize::square(500).unwrap(), ResizeFilter::Lanczos3).unwrap();
assert_eq!(fitted.canvas.dimensions(), (500, 500));
assert_eq!((fitted.placement.offset_x, fitted.placement.offset_y), (0, 150));
```

Error handling
--------------
All public functions return `assetfit::Result<T>`. A batch stops at the first
failing input; outputs written before it remain on disk.

```rust,no_run
use std::path::Path;
use assetfit::{CanvasSize, Error, ResizeFilter, process_image_to_path};

fn main() {
    let size = CanvasSize::default();
    match process_image_to_path(Path::new("in.png"), Path::new("out.png"), size, ResizeFilter::Lanczos3) {
        Ok(_) => {}
        Err(Error::MissingFile { path }) => eprintln!("no such file: {}", path.display()),
        Err(Error::Decode { path, .. }) => eprintln!("not an image: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points (single image, batch).
- [`types`] — `CanvasSize`, `ResizeFilter`, `Category`.
- [`core`] — fit geometry, resampling, padding, batch parameters.
- [`io`] — image decoding and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::BatchParams;
pub use core::processing::pipeline::{FittedImage, Placement, fit_to_canvas};
pub use core::processing::resize::{FitDimensions, fit_dimensions};
pub use error::{Error, Result};
pub use types::{CanvasSize, Category, ResizeFilter};

pub use api::{
    BatchReport, output_path_for, process_batch, process_image_to_buffer, process_image_to_path,
};
