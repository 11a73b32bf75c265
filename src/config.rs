use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project_dirs;

pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: DashboardConfig = toml::from_str(&raw)
            .with_context(|| format!("parsing TOML: {}", path.display()))?;
        Ok(cfg)
    }

    /// A missing file is not an error; the defaults talk to a local analysis service.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub reset_page_on_search: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::unique_test_dir;
    use std::fs;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = unique_test_dir("config-missing");

        let cfg = DashboardConfig::load_or_default(&temp_dir.join(CONFIG_FILE_NAME))
            .expect("missing config should fall back to defaults");

        assert_eq!(cfg.api.base_url, "http://localhost:5000");
        assert!(!cfg.view.reset_page_on_search);
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.logging.json);
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let temp_dir = unique_test_dir("config-partial");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            "[api]\nbase_url = \"https://analyzer.internal:8443\"\n\n[view]\nreset_page_on_search = true\n",
        )
        .expect("should write config fixture");

        let cfg = DashboardConfig::load_or_default(&path).expect("config should parse");

        assert_eq!(cfg.api.base_url, "https://analyzer.internal:8443");
        assert!(cfg.view.reset_page_on_search);
        assert_eq!(cfg.logging.level, "info");

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = unique_test_dir("config-bad");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join(CONFIG_FILE_NAME);
        fs::write(&path, "[api\nbase_url = 1").expect("should write config fixture");

        let result = DashboardConfig::load_or_default(&path);

        assert!(result.is_err(), "malformed TOML should be rejected");

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
