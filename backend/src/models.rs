use serde::{Deserialize, Serialize};

/// Query string of `GET /predict_attendance/`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PredictionQuery {
    pub start_time: String,
}

/// Single-column table fed to the model. One row per requested hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFeatures {
    pub time: Vec<u32>,
}

impl TimeFeatures {
    pub const COLUMN: &'static str = "Time";

    pub fn single(hour: u32) -> Self {
        TimeFeatures { time: vec![hour] }
    }

    pub fn rows(&self) -> usize {
        self.time.len()
    }

    pub fn to_f32(&self) -> Vec<f32> {
        self.time.iter().map(|&h| h as f32).collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PredictionResponse {
    pub predicted_attendance: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorDetail {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        HealthStatus {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ModelInfo {
    pub artifact: String,
    pub input_shape: Vec<usize>,
    pub features: Vec<String>,
    pub rounding: String,
    pub version: String,
}

impl ModelInfo {
    pub fn for_artifact(artifact: impl Into<String>) -> Self {
        ModelInfo {
            artifact: artifact.into(),
            input_shape: vec![1, 1],
            features: vec![TimeFeatures::COLUMN.to_string()],
            rounding: "half-to-even".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
