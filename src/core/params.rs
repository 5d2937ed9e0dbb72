use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{CanvasSize, Category, ResizeFilter};

/// Batch parameters suitable for JSON job files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchParams {
    /// Source images, processed in order; resolved against the working directory
    pub inputs: Vec<PathBuf>,
    /// Destination directory, created if absent
    pub output_dir: PathBuf,
    #[serde(default)]
    pub size: CanvasSize,
    #[serde(default)]
    pub filter: ResizeFilter,
}

impl BatchParams {
    pub fn for_category(category: Category) -> Self {
        Self {
            inputs: category.input_paths(),
            output_dir: category.output_dir(),
            size: CanvasSize::default(),
            filter: ResizeFilter::default(),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let params: BatchParams = serde_json::from_str(&text)?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::EmptyBatch);
        }
        self.size.validate()
    }
}

impl Default for BatchParams {
    fn default() -> Self {
        Self::for_category(Category::Enemies)
    }
}
