use resources::ResourceError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("initialization failed: {0}")]
    Init(String),
    #[error("asset load failed: {0}")]
    AssetLoad(String),
    #[error("text render failed: {0}")]
    TextRender(String),
    #[error("draw call failed: {0}")]
    Draw(String),
}

impl From<ResourceError> for BackendError {
    fn from(e: ResourceError) -> Self {
        BackendError::AssetLoad(e.to_string())
    }
}

pub type Result<T> = core::result::Result<T, BackendError>;
