use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::record::SelectedFile;
use crate::usecase::ports::api::{AnalysisApi, ApiError, UploadReceipt};

pub struct UploadService {
    api: Arc<dyn AnalysisApi>,
}

impl UploadService {
    pub fn new(api: Arc<dyn AnalysisApi>) -> Self {
        Self { api }
    }

    pub fn upload(&self, file: &SelectedFile) -> Result<UploadReceipt, ApiError> {
        let bytes = std::fs::read(&file.path).map_err(|source| ApiError::Io {
            path: file.path.clone(),
            source,
        })?;
        let size = bytes.len();
        match self.api.upload(&file.name, bytes) {
            Ok(receipt) => {
                info!(file = %file.name, bytes = size, "document uploaded");
                Ok(receipt)
            }
            Err(err) => {
                warn!(file = %file.name, error = %err, "upload failed");
                Err(err)
            }
        }
    }
}
