//! Gemini provider - `LlmProvider` backed by Gemini `generateContent`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use discbot::{
    DomainError, FailureKind, GenerationRequest, GenerationResponse, LlmProvider, TokenUsage,
};

use crate::config::AppConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini client. Holds an optional credential; without one it refuses
/// to send anything.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Creates a provider from application config.
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| DomainError::Configuration(format!("HTTP client: {}", err)))?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(DomainError::missing_credential)?;

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| DomainError::external(FailureKind::Parse, err.to_string()))?;

        let text = extract_text(&payload).ok_or_else(|| {
            DomainError::external(FailureKind::EmptyResponse, describe_empty(&payload))
        })?;

        let usage = extract_usage(&payload);
        tracing::debug!(
            model = %self.model,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Gemini response received"
        );

        Ok(GenerationResponse {
            text,
            model: payload
                .get("modelVersion")
                .and_then(|v| v.as_str())
                .unwrap_or(self.model.as_str())
                .to_string(),
            usage,
            finish_reason: extract_finish_reason(&payload),
        })
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ============================================
// Helper Functions
// ============================================

fn extract_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    if !text.trim().is_empty() {
                        collected.push(text);
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.concat())
    }
}

fn extract_finish_reason(root: &Value) -> Option<String> {
    root.get("candidates")?
        .as_array()?
        .first()?
        .get("finishReason")?
        .as_str()
        .map(|s| s.to_string())
}

fn extract_usage(root: &Value) -> TokenUsage {
    let Some(meta) = root.get("usageMetadata") else {
        return TokenUsage::default();
    };

    let count = |key: &str| {
        meta.get(key)
            .and_then(|v| v.as_u64())
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0)
    };

    TokenUsage {
        prompt_tokens: count("promptTokenCount"),
        completion_tokens: count("candidatesTokenCount"),
        total_tokens: count("totalTokenCount"),
    }
}

fn describe_empty(root: &Value) -> String {
    if let Some(reason) = root
        .get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .and_then(|r| r.as_str())
    {
        return format!("prompt blocked: {}", reason);
    }

    match extract_finish_reason(root) {
        Some(reason) => format!("no text in response (finish reason {})", reason),
        None => "no candidates in response".to_string(),
    }
}

fn map_request_error(err: reqwest::Error) -> DomainError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Transport
    };
    DomainError::external(kind, err.to_string())
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    if status == StatusCode::TOO_MANY_REQUESTS {
        return DomainError::external(FailureKind::RateLimited, message);
    }

    DomainError::external(
        FailureKind::Api,
        format!("HTTP {}: {}", status.as_u16(), message),
    )
}
