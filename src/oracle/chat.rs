use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Request<'a> {
    model: &'a str,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct Response {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Reported>,
}

#[derive(Debug, Deserialize)]
struct Reported {
    prompt_tokens: Tokens,
    completion_tokens: Tokens,
    #[serde(default)]
    completion_tokens_details: Option<Details>,
}

#[derive(Debug, Deserialize)]
struct Details {
    #[serde(default)]
    reasoning_tokens: Tokens,
}

impl From<Reported> for Usage {
    fn from(r: Reported) -> Self {
        let thinking = r
            .completion_tokens_details
            .map(|d| d.reasoning_tokens)
            .unwrap_or(0)
            .min(r.completion_tokens);
        Self {
            input: r.prompt_tokens,
            output: r.completion_tokens - thinking,
            thinking,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Reply,
}

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible `chat/completions` endpoints.
pub struct Chat {
    client: reqwest::Client,
    settings: Settings,
    last: Option<Usage>,
}

impl Chat {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
        Ok(Self {
            client,
            settings,
            last: None,
        })
    }
}

#[async_trait::async_trait]
impl Oracle for Chat {
    fn model(&self) -> &str {
        &self.settings.label
    }
    async fn complete(&mut self, system: &str, user: &str) -> anyhow::Result<String> {
        self.last = None;
        let request = Request {
            model: &self.settings.model,
            messages: vec![Message::system(system), Message::user(user)],
            temperature: self.settings.temperature,
        };
        let response = self
            .client
            .post(&self.settings.url)
            .bearer_auth(&self.settings.key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} returned {}: {}", self.settings.label, status, body);
        }
        let response = response.json::<Response>().await?;
        self.last = response.usage.map(Usage::from);
        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("{} returned no content", self.settings.label))
    }
    fn usage(&mut self) -> Option<Usage> {
        self.last.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn reported_usage_splits_reasoning() {
        let response = serde_json::from_str::<Response>(
            r#"{
                "choices": [{"message": {"content": "player_2"}}],
                "usage": {
                    "prompt_tokens": 120,
                    "completion_tokens": 50,
                    "completion_tokens_details": {"reasoning_tokens": 30}
                }
            }"#,
        )
        .unwrap();
        let usage = Usage::from(response.usage.unwrap());
        assert_eq!(usage.input, 120);
        assert_eq!(usage.output, 20);
        assert_eq!(usage.thinking, 30);
        assert_eq!(usage.full_output(), 50);
    }
    #[test]
    fn usage_is_optional() {
        let response =
            serde_json::from_str::<Response>(r#"{"choices": [{"message": {"content": null}}]}"#)
                .unwrap();
        assert!(response.usage.is_none());
        assert!(response.choices[0].message.content.is_none());
    }
}
