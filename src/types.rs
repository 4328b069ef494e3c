// src/types.rs
use reqwest::Method;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub timeout: Duration,
    pub user_agent: String,
    pub proxy: Option<String>,
    pub base_urls: HashMap<String, String>,
    pub pool_max_idle_per_host: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(1),
            user_agent: format!(
                "Mozilla/5.0 (X11; Linux x86_64) namescan/{}",
                env!("CARGO_PKG_VERSION")
            ),
            proxy: None,
            base_urls: HashMap::new(),
            pool_max_idle_per_host: 10,
        }
    }
}

/// On-disk configuration. Every key is optional and overrides the default.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
    #[serde(default)]
    pub base_urls: HashMap<String, String>,
    pub pool_max_idle_per_host: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Form(Vec<(String, String)>),
    Json(serde_json::Value),
}

/// Everything needed to send one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestSpec {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            ..Self::get(url)
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of a cookie set by this response.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("set-cookie"))
            .filter_map(|(_, v)| v.split(';').next())
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| k.trim() == name)
            .map(|(_, v)| v.trim())
    }

    pub fn json<T>(&self) -> Result<T, NameScanError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(&self.body)
            .map_err(|e| NameScanError::JsonParseError(e.to_string(), self.body.clone()))
    }
}

/// How a platform judged one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub success: bool,
    pub message: String,
}

impl Verdict {
    pub fn available() -> Self {
        Self {
            valid: true,
            success: true,
            message: "Available".to_string(),
        }
    }

    pub fn taken(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            success: true,
            message: message.into(),
        }
    }

    pub fn inconclusive(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Available,
    Taken,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub username: String,
    pub platform: String,
    pub valid: bool,
    pub success: bool,
    pub message: String,
}

impl QueryResult {
    pub fn new(username: &str, platform: &str, verdict: Verdict) -> Self {
        Self {
            username: username.to_string(),
            platform: platform.to_string(),
            valid: verdict.valid,
            success: verdict.success,
            message: verdict.message,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match (self.success, self.valid) {
            (true, true) => Outcome::Available,
            (true, false) => Outcome::Taken,
            (false, _) => Outcome::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NetworkError,
    ParseError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetworkError => write!(f, "NetworkError"),
            Self::ParseError => write!(f, "ParseError"),
        }
    }
}

/// A query that could not be completed. Kept apart from the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub platform: String,
    pub username: String,
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum NameScanError {
    #[error("{0}")]
    InputError(String),

    #[error("{0} is not a valid platform")]
    InvalidPlatform(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout error: {0}")]
    TimeoutError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("JSON parse error: {0}\nBody: {1}")]
    JsonParseError(String, String),

    #[error("Platform definition error in {platform}: {message}")]
    PlatformDefinition { platform: String, message: String },

    #[error("Output error: {0}")]
    OutputError(String),
}

impl NameScanError {
    /// The recoverable category of this error, if it has one.
    ///
    /// Errors without a kind point at a broken platform definition or some
    /// other programming fault and must not be swallowed by the batch.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::NetworkError(_) | Self::TimeoutError(_) => Some(FailureKind::NetworkError),
            Self::ParseError(_) | Self::JsonParseError(..) => Some(FailureKind::ParseError),
            _ => None,
        }
    }

    /// Short description used in failure reports; drops response bodies.
    pub fn detail(&self) -> String {
        match self {
            Self::JsonParseError(message, _) => format!("JSON parse error: {}", message),
            other => other.to_string(),
        }
    }
}
