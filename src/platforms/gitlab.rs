// src/platforms/gitlab.rs
use crate::platforms::{unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExistsResponse {
    exists: bool,
}

#[derive(Debug, Clone)]
pub struct GitLabPlatform {
    name: String,
    origin: String,
}

impl Default for GitLabPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl GitLabPlatform {
    pub fn new() -> Self {
        Self {
            name: "GitLab".to_string(),
            origin: "https://gitlab.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for GitLabPlatform {
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
        Ok(RequestSpec::get(format!(
            "{}/users/{}/exists",
            self.origin,
            urlencoding::encode(username)
        ))
        .header("Accept", "application/json"))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        if response.status != 200 {
            return Ok(unexpected_status(response.status));
        }

        let parsed: ExistsResponse = response.json()?;
        if parsed.exists {
            Ok(Verdict::taken("Username taken"))
        } else {
            Ok(Verdict::available())
        }
    }
}
