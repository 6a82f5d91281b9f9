use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};

use crate::error::PredictionError;
use crate::inference::{self, Predictor};
use crate::models::{ErrorDetail, HealthStatus, ModelInfo, PredictionQuery};

/// Loaded once in `main`, shared read-only by every worker.
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
    pub model_info: ModelInfo,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>, model_info: ModelInfo) -> Self {
        AppState {
            predictor,
            model_info,
        }
    }
}

async fn predict_attendance(
    state: web::Data<AppState>,
    query: web::Query<PredictionQuery>,
) -> Result<HttpResponse, PredictionError> {
    let start_time = query.into_inner().start_time;

    match inference::predict_attendance(state.predictor.as_ref(), &start_time) {
        Ok(response) => {
            info!(
                "Predicted attendance {} for start_time={}",
                response.predicted_attendance, start_time
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            warn!("Rejected start_time={:?}: {}", start_time, e);
            Err(e)
        }
    }
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::ok())
}

async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.model_info)
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorDetail::new("Not Found"))
}

/// Any origin, method and header; credentials allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        PredictionError::InvalidQuery(err.to_string()).into()
    }))
    .service(
        web::resource(vec!["/predict_attendance/", "/predict_attendance"])
            .route(web::get().to(predict_attendance)),
    )
    .route("/health", web::get().to(health_check))
    .route("/model_info", web::get().to(model_info))
    .default_service(web::route().to(not_found));
}
