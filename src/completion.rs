//! # Completion Service Module
//!
//! ## Purpose
//! Thin client for the external LLM completion endpoint used by the chat
//! route. The service receives a fixed system instruction plus a prompt
//! embedding the keyword-matched records as context, and returns free text.
//!
//! ## Input/Output Specification
//! - **Input**: User question and the record-context block
//! - **Output**: Completion text from the first candidate
//! - **Errors**: Transport and payload failures map to
//!   `AdvisorError::Upstream`; no retry/backoff beyond the request timeout
//!
//! ## Wire format
//! Gemini-style `generateContent` REST call:
//! `POST {api_url}/models/{model}:generateContent?key={api_key}`

use crate::config::CompletionConfig;
use crate::errors::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// System instruction sent with every completion request.
const SYSTEM_INSTRUCTION: &str = "You are an expert assistant for analyzing \
End-of-Studies Projects (PFE). You use the provided data to answer factually. \
Always respond in English, using bullet points if multiple items. \
Be clear, concise, and professional.";

/// Client for the external completion service.
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl CompletionClient {
    /// Build a client from configuration.
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AdvisorError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { http, config })
    }

    /// Whether an API key is configured; the chat route refuses requests
    /// without one instead of sending doomed calls upstream.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Ask the completion service a question with the record context block
    /// embedded in the prompt.
    pub async fn ask(&self, question: &str, context: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisorError::Upstream {
                details: "completion API key is not configured".to_string(),
            })?;

        let prompt = format!(
            "User question: {}\nAvailable data:\n{}\n\nAnswer in English, in a structured and professional way.",
            question, context
        );

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url.trim_end_matches('/'),
            self.config.model,
            api_key
        );

        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("Sending completion request to model {}", self.config.model);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::Upstream {
                details: format!("completion request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Upstream {
                details: format!("completion service returned {}: {}", status, body),
            });
        }

        let payload: GenerateResponse =
            response.json().await.map_err(|e| AdvisorError::Upstream {
                details: format!("invalid completion payload: {}", e),
            })?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AdvisorError::Upstream {
                details: "completion response contained no candidates".to_string(),
            })
    }
}
