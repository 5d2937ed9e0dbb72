//! Shared types used across assetfit.
//! Includes `CanvasSize`, `ResizeFilter` and the built-in asset `Category` presets.
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Largest accepted canvas side; 16384x16384 RGBA is 1 GiB
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Output canvas dimensions in pixels, shared by every image of a batch
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroSize { width, height });
        }
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: format!("{width}x{height} (max side {MAX_CANVAS_SIDE})"),
            });
        }
        Ok(Self { width, height })
    }

    /// Byte length of an RGBA8 buffer covering the canvas
    pub fn rgba_len(&self) -> crate::Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| Error::InvalidArgument {
                arg: "size",
                value: self.to_string(),
            })
    }

    pub fn square(side: u32) -> crate::Result<Self> {
        Self::new(side, side)
    }

    pub fn validate(&self) -> crate::Result<()> {
        Self::new(self.width, self.height).map(|_| ())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts `WIDTHxHEIGHT` (e.g. `500x300`) or a single side for square canvases
impl FromStr for CanvasSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument {
            arg: "size",
            value: s.to_string(),
        };
        let trimmed = s.trim();
        match trimmed.split_once(['x', 'X']) {
            Some((w, h)) => {
                let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
                let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
                CanvasSize::new(width, height)
            }
            None => {
                let side = trimmed.parse::<u32>().map_err(|_| invalid())?;
                CanvasSize::square(side)
            }
        }
    }
}

/// Resampling filter used when an image has to shrink
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Box,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeFilter::Nearest => write!(f, "Nearest"),
            ResizeFilter::Box => write!(f, "Box"),
            ResizeFilter::Bilinear => write!(f, "Bilinear"),
            ResizeFilter::CatmullRom => write!(f, "CatmullRom"),
            ResizeFilter::Mitchell => write!(f, "Mitchell"),
            ResizeFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

const ENEMY_ASSETS: &[&str] = &[
    "Acid Spitters",
    "Brutal Maulers",
    "Cave Crawlers",
    "Hive Guardian",
    "Inferno Behemoths",
    "Necrotic Swarmers",
    "Ravenous Gnashers",
    "Shadow Stalkers",
    "Spore Hurlers",
    "Winged Terrors",
];

const UNIT_ASSETS: &[&str] = &[
    "Combat Engineers",
    "Combat Medical Unit",
    "Infantry Unit",
    "Irregular Unit",
    "Mechanized Infantry",
    "Power Armored Infantry",
    "Sappers",
    "Special Forces",
];

/// Built-in asset groups; each lives in a directory named after the category
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Enemies,
    Units,
}

impl Category {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Enemies => "enemies",
            Category::Units => "units",
        }
    }

    pub fn asset_names(&self) -> &'static [&'static str] {
        match self {
            Category::Enemies => ENEMY_ASSETS,
            Category::Units => UNIT_ASSETS,
        }
    }

    /// Relative input paths, in the order they are processed
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.asset_names()
            .iter()
            .map(|name| PathBuf::from(self.dir_name()).join(format!("{name}.png")))
            .collect()
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.dir_name())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_by_height() {
        let size: CanvasSize = "640x480".parse().unwrap();
        assert_eq!(size, CanvasSize { width: 640, height: 480 });
    }

    #[test]
    fn parses_single_side_as_square() {
        let size: CanvasSize = " 256 ".parse().unwrap();
        assert_eq!(size, CanvasSize { width: 256, height: 256 });
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(matches!(
            "0x10".parse::<CanvasSize>(),
            Err(Error::ZeroSize { width: 0, height: 10 })
        ));
        assert!(matches!(
            "wide".parse::<CanvasSize>(),
            Err(Error::InvalidArgument { arg: "size", .. })
        ));
        assert!(matches!(
            "10x".parse::<CanvasSize>(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn rejects_oversized_canvas() {
        assert!(CanvasSize::square(MAX_CANVAS_SIDE).is_ok());
        assert!(matches!(
            CanvasSize::new(MAX_CANVAS_SIDE + 1, 10),
            Err(Error::InvalidArgument { arg: "size", .. })
        ));
        assert!(matches!(
            "4294967295x4294967295".parse::<CanvasSize>(),
            Err(Error::InvalidArgument { arg: "size", .. })
        ));
        let literal = CanvasSize { width: u32::MAX, height: u32::MAX };
        assert!(literal.validate().is_err());
    }

    #[test]
    fn rgba_len_counts_four_bytes_per_pixel() {
        let size = CanvasSize::new(3, 2).unwrap();
        assert_eq!(size.rgba_len().unwrap(), 24);
    }

    #[test]
    fn enemy_preset_paths() {
        let paths = Category::Enemies.input_paths();
        assert_eq!(paths.len(), 10);
        assert_eq!(paths[0], PathBuf::from("enemies/Acid Spitters.png"));
        assert_eq!(paths[9], PathBuf::from("enemies/Winged Terrors.png"));
        assert_eq!(Category::Enemies.output_dir(), PathBuf::from("enemies"));
    }

    #[test]
    fn unit_preset_paths() {
        let paths = Category::Units.input_paths();
        assert_eq!(paths.len(), 8);
        assert!(paths.iter().all(|p| p.starts_with("units")));
        assert_eq!(paths[6], PathBuf::from("units/Sappers.png"));
    }

    #[test]
    fn default_filter_is_lanczos() {
        assert_eq!(ResizeFilter::default(), ResizeFilter::Lanczos3);
    }
}
