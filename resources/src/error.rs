use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("asset {name} not found (searched: {searched})")]
    NotFound { name: String, searched: String },
    #[error("decoding image {} failed: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("image {} has unsupported format: {reason}", .path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },
}

pub type Result<T> = core::result::Result<T, ResourceError>;
