use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// One row of document-analysis output as returned by `GET /results`.
///
/// The service keys its objects with display labels (`"Company Name"`), so the
/// mapping to field names happens here and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisRecord {
    #[serde(rename = "Company Name", default, deserialize_with = "null_as_empty")]
    pub company_name: String,
    #[serde(rename = "Description", default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "Verdict", default, deserialize_with = "null_as_empty")]
    pub verdict: String,
    #[serde(rename = "Date", default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(rename = "Timestamp", default, deserialize_with = "null_as_empty")]
    pub timestamp: String,
}

impl AnalysisRecord {
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.company_name.to_lowercase().contains(needle) || self.date.to_lowercase().contains(needle)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_space_keyed_fields() {
        let raw = r#"{
            "Company Name": "Acme",
            "Description": "Strong quarter",
            "Verdict": "Positive",
            "Date": "2024-01-01",
            "Timestamp": "2024-01-02 10:00:00"
        }"#;

        let record: AnalysisRecord = serde_json::from_str(raw).expect("record should parse");

        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.description, "Strong quarter");
        assert_eq!(record.verdict, "Positive");
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.timestamp, "2024-01-02 10:00:00");
    }

    #[test]
    fn record_treats_null_and_missing_fields_as_empty() {
        let raw = r#"{ "Company Name": null, "Verdict": "Negative" }"#;

        let record: AnalysisRecord = serde_json::from_str(raw).expect("record should parse");

        assert_eq!(record.company_name, "");
        assert_eq!(record.description, "");
        assert_eq!(record.verdict, "Negative");
        assert_eq!(record.date, "");
    }

    #[test]
    fn search_ignores_verdict_and_description() {
        let record = AnalysisRecord {
            company_name: "Globex".to_string(),
            description: "acme mentioned here".to_string(),
            verdict: "acme".to_string(),
            date: "2024-02-02".to_string(),
            timestamp: String::new(),
        };

        assert!(record.matches_search("glob"));
        assert!(record.matches_search("02-02"));
        assert!(!record.matches_search("acme"));
    }

    #[test]
    fn selected_file_takes_name_from_path() {
        let file = SelectedFile::from_path(Path::new("/tmp/reports/q1.pdf"));

        assert_eq!(file.name, "q1.pdf");
        assert_eq!(file.path, PathBuf::from("/tmp/reports/q1.pdf"));
    }
}
