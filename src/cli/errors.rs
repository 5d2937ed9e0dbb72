use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be WIDTHxHEIGHT or a positive integer, each side at most {}", assetfit::types::MAX_CANVAS_SIDE)]
    InvalidSize { size: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Failed to serialize job: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Library(#[from] assetfit::Error),
}
