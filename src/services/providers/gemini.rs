/// Gemini-style generateContent provider
///
/// Sends a single-turn prompt to the language-model collaborator and returns
/// the first candidate's text. One attempt per call; no retries.
use crate::{
    error::{AppError, AppResult},
    models::GenerateContentResponse,
    services::providers::LanguageModel,
};
use reqwest::Client as HttpClient;
use serde_json::json;

const MODEL_NAME: &str = "gemini-pro";

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl LanguageModel for GeminiProvider {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/models/{}:generateContent", self.api_url, MODEL_NAME);

        let body = json!({
            "contents": [
                { "parts": [{ "text": prompt }] }
            ]
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Language model API returned status {}: {}",
                status, body
            )));
        }

        let reply: GenerateContentResponse = response.json().await?;

        let text = reply.first_text().ok_or_else(|| {
            AppError::ExternalApi("Language model response contained no text".to_string())
        })?;

        tracing::debug!(
            reply_len = text.len(),
            provider = self.name(),
            "Model reply received"
        );

        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_extraction_takes_first_candidate() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [{ "text": "Happy" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "sad" }] } }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("Happy"));
    }

    #[test]
    fn test_reply_extraction_handles_empty_parts() {
        let json = r#"{ "candidates": [{ "content": { "parts": [] } }] }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
