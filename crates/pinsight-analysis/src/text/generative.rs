//! Client for an OpenAI-compatible chat-completions endpoint returning
//! structured profile analysis.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::GenerativeSettings;
use crate::error::GenerativeError;

pub(crate) const SYSTEM_PROMPT: &str = "\
Você é estrategista de marca para criadores e pequenos negócios. \
Analise a bio e as legendas do perfil e responda somente com um objeto JSON \
com as chaves: toneOfVoice (string curta descrevendo o tom de voz), \
themes (lista de 3 a 6 temas recorrentes), headlineIdeas (lista de 3 títulos \
para a página inicial do site) e primaryCta (string com a principal chamada \
para ação). Responda em português do Brasil.";

/// Generative text service client.
pub(crate) struct GenerativeClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

/// Structured analysis returned by the service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct GenerativeReply {
    pub(crate) tone_of_voice: String,
    pub(crate) themes: Vec<String>,
    pub(crate) headline_ideas: Vec<String>,
    pub(crate) primary_cta: String,
}

impl GenerativeReply {
    /// Parse and validate the message content of a chat completion.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeError::Shape`] if `content` is not the expected
    /// object, or [`GenerativeError::Invalid`] if a field is blank or a list
    /// is empty.
    pub(crate) fn parse(content: &str) -> Result<Self, GenerativeError> {
        let reply: Self = serde_json::from_str(content)?;
        reply.validate()
    }

    fn validate(self) -> Result<Self, GenerativeError> {
        let blank = |field: &'static str| GenerativeError::Invalid {
            field,
            reason: "must be non-empty".to_string(),
        };

        if self.tone_of_voice.trim().is_empty() {
            return Err(blank("toneOfVoice"));
        }
        if self.themes.is_empty() || self.themes.iter().any(|t| t.trim().is_empty()) {
            return Err(blank("themes"));
        }
        if self.headline_ideas.is_empty() || self.headline_ideas.iter().any(|h| h.trim().is_empty())
        {
            return Err(blank("headlineIdeas"));
        }
        if self.primary_cta.trim().is_empty() {
            return Err(blank("primaryCta"));
        }

        Ok(Self {
            tone_of_voice: self.tone_of_voice.trim().to_string(),
            themes: self.themes.iter().map(|t| t.trim().to_string()).collect(),
            headline_ideas: self
                .headline_ideas
                .iter()
                .map(|h| h.trim().to_string())
                .collect(),
            primary_cta: self.primary_cta.trim().to_string(),
        })
    }
}

impl GenerativeClient {
    /// Create a client for `settings.base_url` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeError::Http`] if the `reqwest::Client` cannot be built.
    pub(crate) fn new(settings: &GenerativeSettings, api_key: &str) -> Result<Self, GenerativeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pinsight/0.1 (profile-insight)")
            .build()?;

        Ok(Self {
            client,
            url: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: settings.model.clone(),
        })
    }

    /// Issue one structured analysis request. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeError`] on network failure, non-2xx status, a
    /// response without message content, or content that fails validation.
    pub(crate) async fn analyze(
        &self,
        system: &str,
        user: &str,
    ) -> Result<GenerativeReply, GenerativeError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: 0.7,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerativeError::Status(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerativeError::EmptyResponse)?;

        GenerativeReply::parse(&content)
    }
}
