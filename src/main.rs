mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::{error, info};

use crate::app::App;
use crate::config::{default_config_path, DashboardConfig};
use crate::infra::http::client::HttpAnalysisApi;
use crate::logging::init_logging;
use crate::ui::state::app_state::AppServices;

const DESCRIPTION_PREVIEW_CHARS: usize = 80;

fn main() {
    if let Err(err) = run() {
        error!("fatal: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = default_config_path()?;
    let config = DashboardConfig::load_or_default(&config_path)?;
    init_logging(&config.logging)?;
    info!(
        config = %config_path.display(),
        base_url = %config.api.base_url,
        "starting dashboard"
    );

    let api = HttpAnalysisApi::new(&config.api.base_url)
        .map_err(|err| anyhow!(err.to_string()))
        .context("failed to set up the analysis service client")?;
    let services = AppServices::new(Arc::new(api), config.view.clone());
    let webview_data_dir = default_webview_data_dir()?;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Document Analyzer"),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(services)
        .launch(App);
    Ok(())
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "doc-analyzer")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

fn table_header_cell_style() -> &'static str {
    "border: 1px solid #ccc; padding: 8px; text-align: left; white-space: nowrap;"
}

fn table_cell_style() -> &'static str {
    "border: 1px solid #ccc; padding: 8px; vertical-align: top;"
}
