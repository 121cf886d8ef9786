use crate::ClassifierSettings;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::fmt;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Failure of a single completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// The configured API key variable is unset or empty
    MissingApiKey(String),

    /// Request could not be sent or the connection failed
    Transport(String),

    /// Server answered with a non-success status
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    Malformed(String),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierError::MissingApiKey(var) => write!(f, "API key not set ({})", var),
            ClassifierError::Transport(msg) => write!(f, "request failed: {}", msg),
            ClassifierError::Status { status, message } => {
                write!(f, "API returned {}: {}", status, message)
            }
            ClassifierError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ClassifierError {}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClassifierError::Malformed(err.to_string())
        } else {
            ClassifierError::Transport(err.to_string())
        }
    }
}

/// A model that turns one user prompt into text.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, ClassifierError>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for &T {
    fn complete(&self, prompt: &str) -> Result<String, ClassifierError> {
        (**self).complete(prompt)
    }
}

/// Blocking client for the Anthropic Messages API
pub struct AnthropicClient {
    http: HttpClient,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn from_settings(settings: &ClassifierSettings) -> Result<Self, ClassifierError> {
        let api_key = settings
            .api_key()
            .ok_or_else(|| ClassifierError::MissingApiKey(settings.api_key_env.clone()))?;
        let http = HttpClient::builder().build()?;

        Ok(Self {
            http,
            api_base: settings.resolved_api_base().trim_end_matches('/').to_string(),
            api_key,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        })
    }
}

impl CompletionClient for AnthropicClient {
    fn complete(&self, prompt: &str) -> Result<String, ClassifierError> {
        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Serialize)]
        struct Request<'a> {
            model: &'a str,
            max_tokens: u32,
            messages: Vec<Message<'a>>,
        }

        #[derive(Deserialize)]
        struct ContentBlock {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            text: String,
        }

        #[derive(Deserialize)]
        struct Response {
            content: Vec<ContentBlock>,
        }

        #[derive(Deserialize)]
        struct ErrorDetail {
            message: String,
        }

        #[derive(Deserialize)]
        struct ErrorResponse {
            error: ErrorDetail,
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(&self.api_key)
                .map_err(|err| ClassifierError::Transport(err.to_string()))?,
        );
        headers.insert(
            HeaderName::from_static("anthropic-version"),
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let request = Request {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/v1/messages", self.api_base);
        tracing::debug!(%url, model = %self.model, "sending classifier request");
        let response = self.http.post(url).headers(headers).json(&request).send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .json::<ErrorResponse>()
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "unknown API error".to_string());
            return Err(ClassifierError::Status { status, message });
        }

        let body: Response = response.json()?;
        let text: Vec<String> = body
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text)
            .collect();

        if text.is_empty() {
            return Err(ClassifierError::Malformed(
                "response has no text content".to_string(),
            ));
        }
        Ok(text.join("\n"))
    }
}
