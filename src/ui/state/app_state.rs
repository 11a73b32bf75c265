use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::config::ViewConfig;
use crate::ui::state::dashboard_state::DashboardState;
use crate::usecase::ports::api::AnalysisApi;
use crate::usecase::services::results_service::ResultsService;
use crate::usecase::services::upload_service::UploadService;

/// Services handed to the view through the launch context.
#[derive(Clone)]
pub struct AppServices {
    pub uploads: Arc<UploadService>,
    pub results: Arc<ResultsService>,
    pub view: ViewConfig,
}

impl AppServices {
    pub fn new(api: Arc<dyn AnalysisApi>, view: ViewConfig) -> Self {
        Self {
            uploads: Arc::new(UploadService::new(api.clone())),
            results: Arc::new(ResultsService::new(api)),
            view,
        }
    }
}

pub struct AppState {
    pub dashboard: Signal<DashboardState>,
    pub last_refreshed: Signal<Option<String>>,
}

impl AppState {
    pub fn new(view: &ViewConfig) -> Self {
        let reset_page_on_search = view.reset_page_on_search;
        Self {
            dashboard: use_signal(move || DashboardState::new(reset_page_on_search)),
            last_refreshed: use_signal(|| None::<String>),
        }
    }
}
