// src/inference/openai.rs
//! A blocking client for OpenAI-compatible chat-completions endpoints.

use super::{Provider, TextInference, VisionInference};
use crate::cancellation::CancellationToken;
use crate::errors::InferenceError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize, Debug)]
struct Message<'a> {
    role: &'static str,
    content: MessageContent<'a>,
}

/// Text-only prompts go out as a plain string; some providers reject part arrays.
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize, Debug)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

/// A chat-completions client bound to one provider and model.
///
/// The same client serves text and image prompts; image prompts are sent as
/// a `data:` URL part next to the text part.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatClient {
    /// Creates a client, reading the provider's API key from the environment.
    ///
    /// # Errors
    /// Returns `InferenceError::MissingApiKey` if the key is unset or blank,
    /// or `InferenceError::Http` if the HTTP client cannot be built.
    pub fn new(
        provider: Provider,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InferenceError> {
        let key_var = provider.api_key_env();
        let api_key = env::var(key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InferenceError::MissingApiKey(key_var.to_string()))?;

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dirsort/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InferenceError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", provider.base_url()),
            model: model.into(),
            api_key,
        })
    }

    fn complete(
        &self,
        content: MessageContent<'_>,
        token: &CancellationToken,
    ) -> Result<String, InferenceError> {
        if token.is_cancelled() {
            return Err(InferenceError::Cancelled);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![Message {
                role: "user",
                content,
            }],
        };
        log::trace!("POST {} (model {})", self.endpoint, self.model);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| InferenceError::Http(e.to_string()))?;

        let body: ChatResponse = response
            .json()
            .map_err(|e| InferenceError::Http(format!("malformed response: {e}")))?;

        extract_answer(body)
    }
}

fn extract_answer(body: ChatResponse) -> Result<String, InferenceError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(InferenceError::EmptyResponse)
}

/// Encodes image bytes as a `data:` URL.
fn data_url(image: &[u8], mime: &str) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(image))
}

impl TextInference for ChatClient {
    fn infer(&self, prompt: &str, token: &CancellationToken) -> Result<String, InferenceError> {
        self.complete(MessageContent::Text(prompt), token)
    }
}

impl VisionInference for ChatClient {
    fn infer_vision(
        &self,
        prompt: &str,
        image: &[u8],
        mime: &str,
        token: &CancellationToken,
    ) -> Result<String, InferenceError> {
        self.complete(
            MessageContent::Parts(vec![
                ContentPart::Text { text: prompt },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: data_url(image, mime),
                    },
                },
            ]),
            token,
        )
    }
}
