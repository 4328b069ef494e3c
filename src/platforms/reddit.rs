// src/platforms/reddit.rs
use crate::platforms::{unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use url::Url;

#[derive(Debug, Clone)]
pub struct RedditPlatform {
    name: String,
    origin: String,
}

impl Default for RedditPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl RedditPlatform {
    pub fn new() -> Self {
        Self {
            name: "Reddit".to_string(),
            origin: "https://www.reddit.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for RedditPlatform {
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
            &format!("{}/api/username_available.json", self.origin),
            &[("user", username)],
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

        // The endpoint answers with a bare JSON boolean
        let available: bool = response.json()?;
        if available {
            Ok(Verdict::available())
        } else {
            Ok(Verdict::taken("Username taken"))
        }
    }
}
