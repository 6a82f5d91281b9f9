use std::sync::Arc;

use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use log::{error, info};

use attendance_predictor::config::Settings;
use attendance_predictor::inference::{OnnxPredictor, Predictor};
use attendance_predictor::models::ModelInfo;
use attendance_predictor::routes::{self, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    info!("Starting attendance prediction service");

    let settings = Settings::from_env()?;

    // No model, no server.
    let model = OnnxPredictor::load(&settings.model_path)
        .with_context(|| format!("could not load model from {}", settings.model_path.display()))
        .inspect_err(|e| error!("{e:#}"))?;
    info!("Model loaded from {}", settings.model_path.display());

    let predictor: Arc<dyn Predictor> = Arc::new(model);
    let state = web::Data::new(AppState::new(
        predictor,
        ModelInfo::for_artifact(settings.model_path.display().to_string()),
    ));

    let bind_address = settings.bind_address();
    info!("Listening on http://{}", bind_address);
    info!("Workers: {}", settings.workers);
    info!("Endpoints:");
    info!("   GET  /predict_attendance/?start_time=HH:MM");
    info!("   GET  /health");
    info!("   GET  /model_info");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-Content-Type-Options", "nosniff")))
            .wrap(routes::cors())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .workers(settings.workers)
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
