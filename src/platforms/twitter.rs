// src/platforms/twitter.rs
use crate::platforms::{unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct UsernameAvailableResponse {
    valid: bool,
    desc: String,
}

#[derive(Debug, Clone)]
pub struct TwitterPlatform {
    name: String,
    origin: String,
}

impl Default for TwitterPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TwitterPlatform {
    pub fn new() -> Self {
        Self {
            name: "Twitter".to_string(),
            origin: "https://api.twitter.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for TwitterPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    fn availability_request(
        &self,
        username: &str,
        _token: Option<&str>,
    ) -> Result<RequestSpec, NameScanError> {
        let url = Url::parse_with_params(
            &format!("{}/i/users/username_available.json", self.origin),
            &[("username", username)],
        )
        .map_err(|e| NameScanError::PlatformDefinition {
            platform: self.name.clone(),
            message: format!("invalid origin: {}", e),
        })?;
        Ok(RequestSpec::get(url.to_string()))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        if response.status != 200 {
            return Ok(unexpected_status(response.status));
        }

        let parsed: UsernameAvailableResponse = response.json()?;
        if parsed.valid {
            Ok(Verdict::available())
        } else {
            Ok(Verdict::taken(parsed.desc))
        }
    }
}
