use crate::usecase::ports::api::ApiError;

/// Runs a blocking service call on the runtime's blocking pool so the view keeps rendering.
pub async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(err) => Err(ApiError::Worker(err.to_string())),
    }
}
