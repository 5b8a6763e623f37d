use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{error, info};

pub const NO_RESPONSE_GENERATED: &str = "I couldn't generate a response.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LanguageModelError {
    #[error("Unable to connect to the language model service: {0}")]
    Connection(String),
    #[error("The language model service responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected language model failure: {0}")]
    Other(String),
}

/// A text generation service answering a prompt in one request
#[async_trait::async_trait]
pub trait ILanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, LanguageModelError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Client for a locally hosted Ollama server
pub struct OllamaClient {
    client: Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            url,
            model,
        }
    }
}

#[async_trait::async_trait]
impl ILanguageModel for OllamaClient {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, LanguageModelError> {
        let preview = prompt.chars().take(50).collect::<String>();
        info!("Sending query to Ollama: {}...", preview);

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            system,
        };
        let res = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    LanguageModelError::Connection(e.to_string())
                } else {
                    LanguageModelError::Other(e.to_string())
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!("Error from Ollama API: {} - {}", status, body);
            return Err(LanguageModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let res = res
            .json::<GenerateResponse>()
            .await
            .map_err(|e| LanguageModelError::Other(e.to_string()))?;
        Ok(res
            .response
            .unwrap_or_else(|| NO_RESPONSE_GENERATED.to_string()))
    }
}

/// Language model with a fixed outcome that remembers the prompts it got
pub struct StaticLanguageModel {
    outcome: Result<String, LanguageModelError>,
    pub prompts: Mutex<Vec<String>>,
}

impl StaticLanguageModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            outcome: Ok(reply.to_string()),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn failing(error: LanguageModelError) -> Self {
        Self {
            outcome: Err(error),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn unreachable() -> Self {
        Self::failing(LanguageModelError::Connection("connection refused".into()))
    }
}

#[async_trait::async_trait]
impl ILanguageModel for StaticLanguageModel {
    async fn generate(&self, prompt: &str, _system: Option<&str>) -> Result<String, LanguageModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connection_failures_are_reported_as_such() {
        // Nothing listens on the discard port
        let client = OllamaClient::new("http://127.0.0.1:9/api/generate".into(), "mistral".into());
        let res = client.generate("hello", None).await;
        assert!(matches!(res, Err(LanguageModelError::Connection(_))));
    }

    #[test]
    fn serializes_generate_request() {
        let body = GenerateRequest {
            model: "mistral",
            prompt: "hi",
            stream: false,
            system: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "model": "mistral", "prompt": "hi", "stream": false })
        );
    }

    #[test]
    fn missing_response_field_is_tolerated() {
        let res: GenerateResponse = serde_json::from_str(r#"{ "done": true }"#).unwrap();
        assert!(res.response.is_none());
    }
}
