use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::record::AnalysisRecord;
use crate::usecase::ports::api::{AnalysisApi, ApiError};

pub struct ResultsService {
    api: Arc<dyn AnalysisApi>,
}

impl ResultsService {
    pub fn new(api: Arc<dyn AnalysisApi>) -> Self {
        Self { api }
    }

    pub fn fetch(&self) -> Result<Vec<AnalysisRecord>, ApiError> {
        self.api
            .fetch_results()
            .inspect(|records| debug!(count = records.len(), "results fetched"))
            .inspect_err(|err| warn!(error = %err, "results fetch failed"))
    }
}
