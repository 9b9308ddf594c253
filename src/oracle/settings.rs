use super::*;
use crate::*;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEEPSEEK_URL: &str = "https://api.deepseek.com/chat/completions";
const GROK_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Connection settings for a chat-completions backend.
///
/// Read from the environment:
/// - `<PREFIX>_API_KEY` (required), e.g. `OPENAI_API_KEY`, `XAI_API_KEY`
/// - `<PREFIX>_BASE_URL` overrides the endpoint
/// - `<PREFIX>_MODEL` overrides the model id
/// - `MAFIA_TEMPERATURE` overrides the sampling temperature
#[derive(Clone)]
pub struct Settings {
    pub label: String,
    pub url: String,
    pub key: String,
    pub model: String,
    pub temperature: f32,
}

impl Settings {
    pub fn from_env(backend: Backend) -> anyhow::Result<Self> {
        let (prefix, key, url, model) = match backend {
            Backend::OpenAi => ("OPENAI", "OPENAI_API_KEY", OPENAI_URL, "gpt-4o-mini"),
            Backend::DeepSeek => ("DEEPSEEK", "DEEPSEEK_API_KEY", DEEPSEEK_URL, "deepseek-chat"),
            Backend::Grok => ("GROK", "XAI_API_KEY", GROK_URL, "grok-3-mini"),
            other => anyhow::bail!("{} is not a chat-completions backend", other),
        };
        let key = std::env::var(key).map_err(|_| anyhow::anyhow!("{} not set", key))?;
        let url = std::env::var(format!("{}_BASE_URL", prefix)).unwrap_or_else(|_| url.to_string());
        let model = std::env::var(format!("{}_MODEL", prefix)).unwrap_or_else(|_| model.to_string());
        let temperature = std::env::var("MAFIA_TEMPERATURE")
            .ok()
            .and_then(|t| t.parse::<f32>().ok())
            .unwrap_or(TEMPERATURE);
        log::debug!("[settings] {} -> {} ({})", backend, url, model);
        Ok(Self {
            label: backend.label().to_string(),
            url,
            key,
            model,
            temperature,
        })
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("label", &self.label)
            .field("url", &self.url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}
