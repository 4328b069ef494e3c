// src/platforms/github.rs
use crate::platforms::{missing_field, require_token, unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use regex::Regex;

const TOKEN_PATTERN: &str =
    r#"(?s)signup_check/username.*?<input[^>]*data-csrf="true"[^>]*value="([^"]+)""#;
const TAG_PATTERN: &str = r"<[^>]*>";

/// GitHub answers username checks through the signup form's auto-check
/// endpoint, which wants the CSRF token embedded in the signup page.
#[derive(Debug, Clone)]
pub struct GitHubPlatform {
    name: String,
    origin: String,
}

impl Default for GitHubPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubPlatform {
    pub fn new() -> Self {
        Self {
            name: "GitHub".to_string(),
            origin: "https://github.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for GitHubPlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> &str {
        &self.origin
    }

    fn requires_token(&self) -> bool {
        true
    }

    fn availability_request(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<RequestSpec, NameScanError> {
        let token = require_token(&self.name, token)?;
        Ok(RequestSpec::post(format!("{}/signup_check/username", self.origin))
            .form(&[("authenticity_token", token), ("value", username)]))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        match response.status {
            200 => Ok(Verdict::available()),
            422 => {
                let message = self.strip_tags(&response.body)?;
                if message.is_empty() {
                    Ok(Verdict::taken("Username taken"))
                } else {
                    Ok(Verdict::taken(message))
                }
            }
            status => Ok(unexpected_status(status)),
        }
    }

    fn token_request(&self) -> Option<RequestSpec> {
        Some(RequestSpec::get(format!("{}/signup", self.origin)))
    }

    fn extract_token(&self, response: &HttpResponse) -> Result<String, NameScanError> {
        let re = Regex::new(TOKEN_PATTERN).map_err(|e| NameScanError::PlatformDefinition {
            platform: self.name.clone(),
            message: format!("token pattern: {}", e),
        })?;

        re.captures(&response.body)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| missing_field(&self.name, "authenticity_token"))
    }
}

impl GitHubPlatform {
    /// Plain text of the auto-check HTML fragment, whitespace collapsed.
    fn strip_tags(&self, html: &str) -> Result<String, NameScanError> {
        let re = Regex::new(TAG_PATTERN).map_err(|e| NameScanError::PlatformDefinition {
            platform: self.name.clone(),
            message: format!("tag pattern: {}", e),
        })?;

        let text = re.replace_all(html, "");
        Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
