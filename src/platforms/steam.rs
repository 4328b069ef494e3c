// src/platforms/steam.rs
use crate::platforms::{unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};

const PROFILE_NOT_FOUND: &str = "The specified profile could not be found.";

/// Steam community vanity URLs. No API, so the profile page is inspected.
#[derive(Debug, Clone)]
pub struct SteamPlatform {
    name: String,
    origin: String,
}

impl Default for SteamPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamPlatform {
    pub fn new() -> Self {
        Self {
            name: "Steam".to_string(),
            origin: "https://steamcommunity.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for SteamPlatform {
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
            "{}/id/{}",
            self.origin,
            urlencoding::encode(username)
        )))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        if response.status != 200 {
            return Ok(unexpected_status(response.status));
        }

        if response.body.contains(PROFILE_NOT_FOUND) {
            Ok(Verdict::available())
        } else {
            Ok(Verdict::taken("Profile exists"))
        }
    }
}
