use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::ProcessQueryRequest;
use std::path::Path;

use crate::handlers::AppState;
use crate::helpers::dataset::load_dataset;
use crate::integrations::gemini::GeminiClient;
use extractors::shape_response;

/// Answer substituted when the generation service fails. The shaping core
/// still runs on it, yielding an empty tabular result.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I could not process your request right now. Please try again.";

pub async fn process_query(
    request: web::Json<ProcessQueryRequest>,
    data: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let (api_key, gemini_config, dataset_path) = {
        let config = data.config.read().map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!(
                "Failed to acquire config read lock: {}",
                e
            ))
        })?;

        (
            config.gemini_api_key().map(str::to_string),
            config.gemini.clone().unwrap_or_default(),
            config.dataset.clone().unwrap_or_default().path,
        )
    };

    let api_key = match api_key {
        Some(key) => key,
        None => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Gemini API key not configured"
            })));
        }
    };

    let dataset = match load_dataset(Path::new(&dataset_path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset: {:#}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load dataset"
            })));
        }
    };

    // Prompt is the user query followed by the dataset, no static phrasing.
    let prompt = format!("{}\n{}", request.query, dataset);

    let client = GeminiClient::new(&api_key, &gemini_config);
    let answer = match client.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Gemini call failed: {}", e);
            FALLBACK_ANSWER.to_string()
        }
    };

    Ok(HttpResponse::Ok().json(shape_response(&answer)))
}
