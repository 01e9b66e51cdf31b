// src/inference/mod.rs

//! Inference collaborators used by content mode.
//!
//! The metadata generator only sees the [`TextInference`] and
//! [`VisionInference`] traits. The HTTP adapter behind them (feature `llm`)
//! talks to any OpenAI-compatible chat-completions endpoint; tests substitute
//! in-process mocks.

use crate::cancellation::CancellationToken;
use crate::config::InferenceConfig;
use crate::errors::InferenceError;

#[cfg(feature = "llm")]
mod openai;
pub mod prompts;
mod provider;

#[cfg(feature = "llm")]
pub use openai::ChatClient;
pub use provider::Provider;

/// Turns a text prompt into a text answer.
pub trait TextInference: Send + Sync {
    /// Sends `prompt` and returns the model's answer, trimmed.
    ///
    /// # Errors
    /// Returns `InferenceError::Cancelled` if `token` is already cancelled,
    /// or another `InferenceError` if the call fails.
    fn infer(&self, prompt: &str, token: &CancellationToken) -> Result<String, InferenceError>;
}

/// Turns an image plus a text prompt into a text answer.
pub trait VisionInference: Send + Sync {
    /// Sends `prompt` together with the encoded image and returns the answer, trimmed.
    ///
    /// `mime` is the image's MIME type, e.g. `image/png`.
    fn infer_vision(
        &self,
        prompt: &str,
        image: &[u8],
        mime: &str,
        token: &CancellationToken,
    ) -> Result<String, InferenceError>;
}

/// The pair of collaborators a content-mode run needs.
pub struct Collaborators {
    /// Used for text, document, and code files.
    pub text: Box<dyn TextInference>,
    /// Used for images.
    pub vision: Box<dyn VisionInference>,
}

/// Builds the configured collaborators.
///
/// # Errors
/// Returns `InferenceError::MissingApiKey` if a provider's key is not set,
/// or `InferenceError::UnsupportedProvider` if the vision provider has no
/// vision model or the crate was built without the `llm` feature.
#[cfg(feature = "llm")]
pub fn connect(config: &InferenceConfig) -> Result<Collaborators, InferenceError> {
    let text_model = config
        .text_model
        .clone()
        .unwrap_or_else(|| config.text_provider.default_text_model().to_string());
    let vision_model = match &config.vision_model {
        Some(model) => model.clone(),
        None => config
            .vision_provider
            .default_vision_model()
            .ok_or_else(|| InferenceError::UnsupportedProvider(config.vision_provider.to_string()))?
            .to_string(),
    };

    log::debug!(
        "Text inference: {} ({}); vision inference: {} ({})",
        config.text_provider,
        text_model,
        config.vision_provider,
        vision_model
    );

    Ok(Collaborators {
        text: Box::new(ChatClient::new(
            config.text_provider,
            text_model,
            config.timeout,
        )?),
        vision: Box::new(ChatClient::new(
            config.vision_provider,
            vision_model,
            config.timeout,
        )?),
    })
}

/// Builds the configured collaborators.
///
/// Always fails: this build has no HTTP adapter.
#[cfg(not(feature = "llm"))]
pub fn connect(_config: &InferenceConfig) -> Result<Collaborators, InferenceError> {
    Err(InferenceError::UnsupportedProvider(
        "content mode (built without the `llm` feature)".to_string(),
    ))
}
