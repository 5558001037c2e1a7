use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Gemini response contained no usable text")]
    EmptyResponse,
}

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Configuration is held per client instance; there is no process-wide
/// API-key state.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GeminiClient {
    pub fn new(api_key: &str, config: &GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// Send one prompt and return the text of the first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&self.build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(text)
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        let generation_config =
            if self.temperature.is_some() || self.max_output_tokens.is_some() {
                Some(GenerationConfig {
                    temperature: self.temperature,
                    max_output_tokens: self.max_output_tokens,
                })
            } else {
                None
            };

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
