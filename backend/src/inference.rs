use std::path::Path;

use chrono::{NaiveTime, Timelike};
use tract_onnx::prelude::*;

use crate::error::PredictionError;
use crate::models::{PredictionResponse, TimeFeatures};

/// Anything that turns a `Time` table into one number per row.
pub trait Predictor: Send + Sync {
    fn predict(&self, input: &TimeFeatures) -> anyhow::Result<Vec<f64>>;
}

/// Regressor exported to ONNX, taking a single float feature.
pub struct OnnxPredictor {
    model: TypedRunnableModel<TypedModel>,
}

impl OnnxPredictor {
    pub fn load<P: AsRef<Path>>(model_path: P) -> TractResult<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 1)))?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model })
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, input: &TimeFeatures) -> anyhow::Result<Vec<f64>> {
        if input.rows() != 1 {
            anyhow::bail!("model expects exactly one row, got {}", input.rows());
        }

        let values = input.to_f32();
        let input_tensor = Tensor::from_shape(&[1, 1], values.as_slice())?;
        let outputs = self.model.run(tvec!(input_tensor.into()))?;
        let output = outputs
            .first()
            .ok_or_else(|| anyhow::anyhow!("model produced no output tensor"))?;

        Ok(output
            .to_array_view::<f32>()?
            .iter()
            .map(|&v| f64::from(v))
            .collect())
    }
}

/// Hour of day from a strict `HH:MM` string.
pub fn parse_hour(start_time: &str) -> Result<u32, PredictionError> {
    let invalid = |reason: String| PredictionError::InvalidTime {
        input: start_time.to_string(),
        reason,
    };

    // chrono skips whitespace ahead of numeric fields.
    if start_time.trim_start() != start_time {
        return Err(invalid("leading whitespace".to_string()));
    }

    NaiveTime::parse_from_str(start_time, "%H:%M")
        .map(|t| t.hour())
        .map_err(|e| invalid(e.to_string()))
}

/// Rounds half to even; negative values clamp to zero.
pub fn round_attendance(prediction: f64) -> Result<u64, PredictionError> {
    if !prediction.is_finite() {
        return Err(PredictionError::NonFiniteOutput(prediction));
    }
    Ok(prediction.round_ties_even().max(0.0) as u64)
}

pub fn predict_attendance(
    model: &dyn Predictor,
    start_time: &str,
) -> Result<PredictionResponse, PredictionError> {
    let hour = parse_hour(start_time)?;
    let outputs = model
        .predict(&TimeFeatures::single(hour))
        .map_err(|e| PredictionError::Inference(format!("{e:#}")))?;
    let prediction = outputs.first().copied().ok_or(PredictionError::EmptyOutput)?;

    Ok(PredictionResponse {
        predicted_attendance: round_attendance(prediction)?,
    })
}
