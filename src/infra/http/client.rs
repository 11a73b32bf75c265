use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::domain::entities::record::AnalysisRecord;
use crate::usecase::ports::api::{AnalysisApi, ApiError, UploadReceipt};

/// Body of `POST /upload`: `{"message": ..}` on success, `{"error": ..}` otherwise.
#[derive(Debug, Default, Deserialize)]
struct UploadReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct HttpAnalysisApi {
    base_url: String,
    client: Client,
}

impl HttpAnalysisApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // No client-side deadline; failures come from the transport or the server.
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| ApiError::Transport(format!("failed to read response: {e}")))?;
    Ok((status.as_u16(), body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl AnalysisApi for HttpAnalysisApi {
    fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadReceipt, ApiError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Transport(format!("HTTP request failed: {e}")))?;
        let (status, body) = read_body(response)?;
        let reply: UploadReply = serde_json::from_str(&body).unwrap_or_default();

        if !is_success(status) {
            let message = reply.error.unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ApiError::Status { status, message });
        }

        Ok(UploadReceipt {
            message: reply.message.unwrap_or_default(),
        })
    }

    fn fetch_results(&self) -> Result<Vec<AnalysisRecord>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("results"))
            .send()
            .map_err(|e| ApiError::Transport(format!("HTTP request failed: {e}")))?;
        let (status, body) = read_body(response)?;

        if !is_success(status) {
            return Err(ApiError::Status {
                status,
                message: format!("HTTP {status}"),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
