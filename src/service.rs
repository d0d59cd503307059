use crate::utils::log_msg;
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = "locale-translator/0.1";

pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
/// Whole-file translations can take minutes on larger documents.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// A text-generation backend that answers one prompt with one text response.
pub trait CompletionService {
    fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|k| !k.trim().is_empty())
            .context("OPENAI_API_KEY is not set")?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            api_key,
            model: config.model,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
            temperature: self.temperature,
        };

        log_msg(
            "debug",
            &format!("POST {} model={} prompt_len={}", self.endpoint, self.model, prompt.len()),
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .with_context(|| format!("request to {} failed", self.endpoint))?;

        let status = resp.status();
        let body = resp.text().context("failed to read response body")?;
        if !status.is_success() {
            log_msg("error", &format!("HTTP {status}: {body}"));
            bail!("HTTP {status} from {}: {body}", self.endpoint);
        }

        parse_content(&body)
    }
}

fn parse_content(body: &str) -> Result<String> {
    let parsed: ChatResponse =
        serde_json::from_str(body).context("unexpected chat completion response")?;
    parsed
        .choices
        .into_iter()
        .next()
        .context("response contained no choices")?
        .message
        .content
        .context("response message has no content")
}
