use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::build_review_prompt;
use super::types::ReviewRequest;
use crate::config::LlmConfig;

const SYSTEM_PROMPT: &str = "You write short, honest customer reviews for local businesses. You answer with the review text only.";

#[derive(Clone)]
pub struct LLMService {
    client: Client,
    base_url: String,
    n_predict: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionRequest {
    prompt: String,
    stream: bool,
    n_predict: usize,
    temperature: f32,
    stop: Vec<String>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    content: String,
}

impl LLMService {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("llm.enabled is set but llm.base_url is empty"));
        }

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_millis(config.timeout_ms))
                .build()
                .context("failed to build HTTP client")?,
            base_url,
            n_predict: config.n_predict,
            temperature: config.temperature,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One request to the completion server. No retries.
    pub async fn generate_review(&self, request: &ReviewRequest) -> Result<String> {
        let full_prompt = format!(
            "System: {}\nUser: {}\nAssistant:",
            SYSTEM_PROMPT,
            build_review_prompt(request)
        );

        let request_body = CompletionRequest {
            prompt: full_prompt,
            stream: false,
            n_predict: self.n_predict,
            temperature: self.temperature,
            stop: vec!["User:".to_string(), "System:".to_string()],
        };

        // llama-server /completion endpoint
        let response = self
            .client
            .post(format!("{}/completion", self.base_url))
            .json(&request_body)
            .send()
            .await
            .context("completion request failed")?;

        if !response.status().is_success() {
            return Err(anyhow!("LLM Server Error: {}", response.status()));
        }

        let resp_json: CompletionResponse = response
            .json()
            .await
            .context("malformed completion response")?;
        let review = resp_json.content.trim().trim_matches('"').trim().to_string();
        if review.is_empty() {
            return Err(anyhow!("LLM returned an empty review"));
        }

        debug!("LLM review received ({} chars)", review.len());
        Ok(review)
    }
}
