use clap::Parser;
use std::path::PathBuf;

use assetfit::{Category, ResizeFilter};

#[derive(Parser)]
#[command(
    name = "assetfit",
    version,
    about = "Fit asset images onto a uniform transparent PNG canvas"
)]
pub struct CliArgs {
    /// Built-in asset list to process (enemies or units)
    #[arg(short, long, value_enum, conflicts_with = "config")]
    pub category: Option<Category>,

    /// Input image; repeat for several. Replaces the preset/job list when given
    #[arg(short, long = "input")]
    pub inputs: Vec<PathBuf>,

    /// Output directory (defaults to the category directory for presets)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Canvas size: WIDTHxHEIGHT (e.g. 500x500) or a single side for a square
    #[arg(short, long)]
    pub size: Option<String>,

    /// Resampling filter used when shrinking
    #[arg(short, long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// JSON job file with inputs, output_dir, size and filter
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved job as JSON and exit without processing
    #[arg(long, default_value_t = false)]
    pub dump_config: bool,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Logging filter directives (e.g. "assetfit=info"); implies logging
    #[arg(long)]
    pub log_filter: Option<String>,
}
