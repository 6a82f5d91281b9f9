use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorDetail;

/// Per-request failures. Every variant is the caller's problem and maps to 400.
#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("time data '{input}' does not match format '%H:%M': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model returned no prediction")]
    EmptyOutput,

    #[error("model returned a non-finite prediction: {0}")]
    NonFiniteOutput(f64),
}

impl ResponseError for PredictionError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail::new(self.to_string()))
    }
}
