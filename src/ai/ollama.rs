use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::AiConfig;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Send a single non-streaming generation request to Ollama and return the
/// raw completion text.
#[instrument(level = "trace", skip(config, prompt))]
pub async fn generate(config: &AiConfig, prompt: &str) -> Result<String> {
    let url = format!("{}/api/generate", config.base_url);
    debug!(url, model = %config.model, "sending generation request");

    let body = GenerateRequest {
        model: &config.model,
        prompt,
        stream: false,
        options: GenerateOptions {
            temperature: config.temperature,
            top_p: config.top_p,
        },
    };

    let client = reqwest::Client::new();
    let resp = client.post(&url).json(&body).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Ollama API error");
        return Err(anyhow!("Ollama API error {status}: {err_text}"));
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "generation response");
    let generated: GenerateResponse = serde_json::from_str(&raw)?;

    Ok(generated.response)
}
