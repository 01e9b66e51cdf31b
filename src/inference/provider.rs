// src/inference/provider.rs

use std::fmt;

/// A hosted, OpenAI-compatible chat-completions provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Provider {
    /// DeepInfra's OpenAI-compatible endpoint.
    #[value(name = "deepinfra")]
    DeepInfra,
    /// DeepSeek's chat API. Text only.
    #[value(name = "deepseek")]
    DeepSeek,
    /// Groq's OpenAI-compatible endpoint.
    #[value(name = "groq")]
    Groq,
    /// OpenAI.
    #[value(name = "openai")]
    OpenAi,
}

impl Provider {
    /// Base URL of the provider's chat-completions API, without the
    /// `/chat/completions` suffix.
    pub fn base_url(self) -> &'static str {
        match self {
            Provider::DeepInfra => "https://api.deepinfra.com/v1/openai",
            Provider::DeepSeek => "https://api.deepseek.com/v1",
            Provider::Groq => "https://api.groq.com/openai/v1",
            Provider::OpenAi => "https://api.openai.com/v1",
        }
    }

    /// Environment variable holding the API key.
    pub fn api_key_env(self) -> &'static str {
        match self {
            Provider::DeepInfra => "DEEPINFRA_API_KEY",
            Provider::DeepSeek => "DEEPSEEK_API_KEY",
            Provider::Groq => "GROQ_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// Model used for text requests unless overridden.
    pub fn default_text_model(self) -> &'static str {
        match self {
            Provider::DeepInfra => "Qwen/Qwen2.5-72B-Instruct",
            Provider::DeepSeek => "deepseek-chat",
            Provider::Groq => "llama-3.3-70b-versatile",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }

    /// Model used for image requests unless overridden, if the provider has one.
    pub fn default_vision_model(self) -> Option<&'static str> {
        match self {
            Provider::Groq => Some("llama-3.2-11b-vision-preview"),
            Provider::OpenAi => Some("gpt-4o"),
            Provider::DeepInfra | Provider::DeepSeek => None,
        }
    }

    /// Whether the provider can describe images.
    pub fn supports_vision(self) -> bool {
        self.default_vision_model().is_some()
    }

    /// All providers, in menu order.
    pub fn all() -> [Provider; 4] {
        [
            Provider::DeepInfra,
            Provider::DeepSeek,
            Provider::Groq,
            Provider::OpenAi,
        ]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::DeepInfra => "deepinfra",
            Provider::DeepSeek => "deepseek",
            Provider::Groq => "groq",
            Provider::OpenAi => "openai",
        };
        f.write_str(name)
    }
}
