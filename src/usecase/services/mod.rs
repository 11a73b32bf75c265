pub mod results_service;
pub mod upload_service;
