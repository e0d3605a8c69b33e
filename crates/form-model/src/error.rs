//! Error Types

use thiserror::Error;

/// Why a selected image was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("unsupported image type {mime:?}")]
    UnsupportedType { mime: String },
    #[error("image is {size} bytes, limit is {max}")]
    TooLarge { size: u64, max: u64 },
}

/// Invalid page-supplied configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
}
