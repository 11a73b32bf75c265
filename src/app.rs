use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tracing::info;

use crate::domain::entities::record::{AnalysisRecord, SelectedFile};
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::state::app_state::{AppServices, AppState};
use crate::ui::state::dashboard_state::{DashboardState, RefreshOutcome, UploadOutcome};
use crate::usecase::services::results_service::ResultsService;
use crate::{table_cell_style, table_header_cell_style, DESCRIPTION_PREVIEW_CHARS};

const COLUMNS: [&str; 5] = ["Company Name", "Description", "Verdict", "Date", "Timestamp"];

pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}…", head.trim_end())
}

async fn refresh_results(
    mut dashboard: Signal<DashboardState>,
    mut last_refreshed: Signal<Option<String>>,
    results: Arc<ResultsService>,
) {
    let ticket = dashboard.write().begin_refresh();
    let fetched = run_blocking(move || results.fetch()).await;
    let outcome = dashboard.write().finish_refresh(ticket, fetched);
    if outcome == RefreshOutcome::Applied {
        last_refreshed.set(Some(Local::now().format("%H:%M:%S").to_string()));
    }
}

#[component]
fn ResultsTable(rows: Vec<AnalysisRecord>, on_open: EventHandler<String>) -> Element {
    let header_style = table_header_cell_style();
    let cell_style = table_cell_style();

    rsx! {
        table {
            style: "margin-top: 1rem; border-collapse: collapse; width: 100%;",
            thead {
                tr { style: "background-color: #f0f0f0;",
                    {COLUMNS.iter().map(|label| rsx!(
                        th { key: "{label}", style: "{header_style}", "{label}" }
                    ))}
                }
            }
            tbody {
                {rows.iter().enumerate().map(|(idx, record)| {
                    let company = record.company_name.clone();
                    let description = record.description.clone();
                    let preview = truncate_description(&record.description, DESCRIPTION_PREVIEW_CHARS);
                    let verdict = record.verdict.clone();
                    let date = record.date.clone();
                    let timestamp = record.timestamp.clone();
                    rsx!(
                        tr { key: "{idx}",
                            td { style: "{cell_style}", "{company}" }
                            td {
                                style: "{cell_style} cursor: pointer; color: #1f4fd1;",
                                title: "Show full description",
                                onclick: move |_| on_open.call(description.clone()),
                                "{preview}"
                            }
                            td { style: "{cell_style}", "{verdict}" }
                            td { style: "{cell_style}", "{date}" }
                            td { style: "{cell_style}", "{timestamp}" }
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn DetailModal(content: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1100;",
            onclick: move |_| on_close.call(()),
            div {
                style: "background: #fff; padding: 16px; border: 1px solid #999; border-radius: 8px; max-width: 640px; max-height: 70vh; overflow-y: auto;",
                onclick: move |event| event.stop_propagation(),
                div { style: "margin-bottom: 8px; font-weight: 600;", "Description" }
                p { style: "white-space: pre-wrap; line-height: 1.5;", "{content}" }
                button {
                    style: "margin-top: 12px;",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context::<AppServices>();
    let AppState {
        mut dashboard,
        last_refreshed,
    } = AppState::new(&services.view);

    let results_for_mount = services.results.clone();
    use_hook(move || {
        spawn(refresh_results(dashboard, last_refreshed, results_for_mount));
    });

    let state = dashboard.read();
    let selected_label = state
        .selected_file
        .as_ref()
        .map(|file| file.name.clone())
        .unwrap_or_else(|| "No file selected".to_string());
    let error_message = state.error_message.clone();
    let status_message = state.status_message.clone();
    let is_loading = state.is_loading;
    let search_term = state.search_term.clone();
    let modal_content = state.modal_content().map(|text| text.to_string());
    let has_results = !state.results.is_empty();
    let view = state.page_view();
    drop(state);

    let page_label = view.label();
    let has_prev = view.has_prev();
    let has_next = view.has_next();

    rsx! {
        div {
            style: "padding: 2rem; font-family: Arial;",
            h1 { "Document Analyzer Dashboard" }

            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    onclick: move |_| {
                        let Some(path) = FileDialog::new()
                            .add_filter("Documents", &["pdf", "docx"])
                            .pick_file() else {
                            return;
                        };
                        dashboard.write().select_file(SelectedFile::from_path(&path));
                    },
                    "Choose file"
                }
                span { "{selected_label}" }
                button {
                    disabled: is_loading,
                    onclick: {
                        let services = services.clone();
                        move |_| {
                            let submitted = dashboard.write().submit_upload();
                            let ticket = match submitted {
                                Ok(ticket) => ticket,
                                Err(err) => {
                                    MessageDialog::new()
                                        .set_level(MessageLevel::Warning)
                                        .set_title("Upload")
                                        .set_description(err.to_string())
                                        .set_buttons(MessageButtons::Ok)
                                        .show();
                                    return;
                                }
                            };
                            info!(file = %ticket.file().name, "upload submitted");
                            let uploads = services.uploads.clone();
                            let results = services.results.clone();
                            spawn(async move {
                                let file = ticket.file().clone();
                                let uploaded = run_blocking(move || uploads.upload(&file)).await;
                                let outcome = dashboard.write().finish_upload(ticket, uploaded);
                                if outcome == UploadOutcome::RefreshRequired {
                                    refresh_results(dashboard, last_refreshed, results).await;
                                }
                            });
                        }
                    },
                    if is_loading { "Uploading…" } else { "Upload" }
                }
            }

            if let Some(message) = error_message {
                p { style: "color: red; margin-top: 1rem;", "{message}" }
            }
            if let Some(message) = status_message {
                p { style: "color: #2d6a2d;", "{message}" }
            }

            h2 { style: "margin-top: 2rem;", "Analysis Table" }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                input {
                    r#type: "search",
                    placeholder: "Search by company or date",
                    value: "{search_term}",
                    oninput: move |event| dashboard.write().set_search_term(event.value()),
                }
                if let Some(at) = last_refreshed() {
                    span { style: "color: #666;", "Last refreshed {at}" }
                }
            }

            if !has_results {
                p { "No data yet" }
            } else if view.filtered_count == 0 {
                p { "No matching results" }
            } else {
                ResultsTable {
                    rows: view.rows.clone(),
                    on_open: move |text: String| dashboard.write().open_detail(text),
                }
            }

            div { style: "display: flex; gap: 8px; align-items: center; margin-top: 12px;",
                button {
                    disabled: !has_prev,
                    onclick: move |_| dashboard.write().prev_page(),
                    "Previous"
                }
                span { "{page_label}" }
                button {
                    disabled: !has_next,
                    onclick: move |_| dashboard.write().next_page(),
                    "Next"
                }
            }

            if let Some(content) = modal_content {
                DetailModal {
                    content,
                    on_close: move |_| dashboard.write().close_detail(),
                }
            }
        }
    }
}
