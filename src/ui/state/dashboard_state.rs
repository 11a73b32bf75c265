use thiserror::Error;
use tracing::debug;

use crate::domain::entities::page::{filter_records, total_pages, PageView};
use crate::domain::entities::record::{AnalysisRecord, SelectedFile};
use crate::usecase::ports::api::{ApiError, UploadReceipt};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch results";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserInputError {
    #[error("Please select a file")]
    NoFileSelected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    file: SelectedFile,
}

impl UploadTicket {
    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    RefreshRequired,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Failed,
    Stale,
}

/// Everything the dashboard view renders from. Mutated only through the methods below;
/// filtering and paging are derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub selected_file: Option<SelectedFile>,
    pub results: Vec<AnalysisRecord>,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub is_loading: bool,
    pub search_term: String,
    pub current_page: usize,
    pub modal: ModalState,
    reset_page_on_search: bool,
    pending_uploads: usize,
    refresh_generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DashboardState {
    pub fn new(reset_page_on_search: bool) -> Self {
        Self {
            selected_file: None,
            results: Vec::new(),
            error_message: None,
            status_message: None,
            is_loading: false,
            search_term: String::new(),
            current_page: 1,
            modal: ModalState::Closed,
            reset_page_on_search,
            pending_uploads: 0,
            refresh_generation: 0,
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected_file = Some(file);
        self.error_message = None;
    }

    pub fn submit_upload(&mut self) -> Result<UploadTicket, UserInputError> {
        let file = self
            .selected_file
            .clone()
            .ok_or(UserInputError::NoFileSelected)?;
        self.pending_uploads += 1;
        self.is_loading = true;
        Ok(UploadTicket { file })
    }

    pub fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<UploadReceipt, ApiError>,
    ) -> UploadOutcome {
        self.pending_uploads = self.pending_uploads.saturating_sub(1);
        self.is_loading = self.pending_uploads > 0;

        match result {
            Ok(receipt) => {
                // A newer pick made while this upload was in flight stays selected.
                if self.selected_file.as_ref() == Some(&ticket.file) {
                    self.selected_file = None;
                }
                self.status_message = if receipt.message.is_empty() {
                    Some(format!("Uploaded {}", ticket.file.name))
                } else {
                    Some(receipt.message)
                };
                UploadOutcome::RefreshRequired
            }
            Err(err) => {
                self.error_message = Some(format!("Upload failed: {err}"));
                UploadOutcome::Failed
            }
        }
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh_generation += 1;
        RefreshTicket {
            generation: self.refresh_generation,
        }
    }

    /// Only the most recently issued refresh may touch state; older responses are dropped.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<AnalysisRecord>, ApiError>,
    ) -> RefreshOutcome {
        if ticket.generation != self.refresh_generation {
            debug!(
                generation = ticket.generation,
                latest = self.refresh_generation,
                "discarding stale results response"
            );
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(records) => {
                self.results = records;
                RefreshOutcome::Applied
            }
            Err(_) => {
                self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
                RefreshOutcome::Failed
            }
        }
    }

    pub fn set_search_term(&mut self, term: String) {
        if self.reset_page_on_search && term != self.search_term {
            self.current_page = 1;
        }
        self.search_term = term;
    }

    pub fn filtered_count(&self) -> usize {
        filter_records(&self.results, &self.search_term).len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count())
    }

    pub fn page_view(&self) -> PageView {
        PageView::build(&self.results, &self.search_term, self.current_page)
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn open_detail(&mut self, text: String) {
        self.modal = ModalState::Open(text);
    }

    pub fn close_detail(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn modal_content(&self) -> Option<&str> {
        match &self.modal {
            ModalState::Open(text) => Some(text),
            ModalState::Closed => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, ModalState::Open(_))
    }
}
