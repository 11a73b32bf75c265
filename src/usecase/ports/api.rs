use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::record::AnalysisRecord;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("background task failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReceipt {
    pub message: String,
}

/// The external analysis service: `POST /upload` and `GET /results`.
pub trait AnalysisApi: Send + Sync {
    fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadReceipt, ApiError>;
    fn fetch_results(&self) -> Result<Vec<AnalysisRecord>, ApiError>;
}
