//! Google Gemini `generateContent` 客户端

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error};

use super::{SQL_PROMPT, SqlGenerator};
use crate::config::AppConfig;
use crate::errors::{Nl2SqlError, Result};

pub struct GeminiClient {
    api_key: String,
    api_base: String,
    model: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.model.api_key.clone(),
            config.model.api_base.clone(),
            config.model.name.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// 指令与问题作为同一条用户消息的两个 part 发送
    fn build_request_body(question: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {"text": SQL_PROMPT},
                    {"text": question}
                ]
            }]
        })
    }

    fn parse_response(body: &str) -> Result<String> {
        let parsed: GenerateContentResponse = serde_json::from_str(body)
            .map_err(|e| Nl2SqlError::model_response(format!("Failed to parse Gemini response: {e}")))?;

        let Some(content) = parsed.candidates.into_iter().next().and_then(|c| c.content) else {
            let reason = parsed
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(Nl2SqlError::model_response(format!(
                "Gemini returned no answer: {reason}"
            )));
        };

        let text = content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect::<String>();

        let text = text.trim();
        if text.is_empty() {
            return Err(Nl2SqlError::model_response("Gemini returned no text"));
        }

        Ok(text.to_string())
    }
}

#[async_trait::async_trait]
impl SqlGenerator for GeminiClient {
    async fn generate_sql(&self, question: &str) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(Nl2SqlError::model_config(
                "GOOGLE_API_KEY is not set; cannot call the model",
            ));
        }

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_request_body(question))
            .send()
            .await
            .map_err(|e| Nl2SqlError::model_request(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Gemini API returned {}", status);
            let truncated: String = body.chars().take(500).collect();
            return Err(Nl2SqlError::model_request(format!(
                "Gemini API error {status}: {truncated}"
            )));
        }

        let sql = Self::parse_response(&body)?;
        debug!("Generated SQL: {}", sql);
        Ok(sql)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
