// src/platforms/snapchat.rs
use crate::platforms::{missing_field, require_token, unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    reference: Option<Reference>,
}

#[derive(Debug, Deserialize)]
struct Reference {
    status_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SnapchatPlatform {
    name: String,
    origin: String,
}

impl Default for SnapchatPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapchatPlatform {
    pub fn new() -> Self {
        Self {
            name: "Snapchat".to_string(),
            origin: "https://accounts.snapchat.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    fn describe(status_code: &str) -> &'static str {
        match status_code {
            "TAKEN" => "Username taken",
            "DELETED" => "Username belongs to a deleted account",
            "TOO_SHORT" => "Username too short",
            "TOO_LONG" => "Username too long",
            "INVALID_BEGIN" | "INVALID_END" | "INVALID_CHAR" => "Username contains invalid characters",
            _ => "Username unavailable",
        }
    }
}

impl Platform for SnapchatPlatform {
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
        Ok(RequestSpec::post(format!(
            "{}/accounts/get_username_suggestions",
            self.origin
        ))
        .form(&[("requested_username", username), ("xsrf_token", token)]))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        if response.status != 200 {
            return Ok(unexpected_status(response.status));
        }

        let parsed: SuggestionsResponse = response.json()?;
        let status_code = parsed
            .reference
            .and_then(|reference| reference.status_code)
            .ok_or_else(|| missing_field(&self.name, "reference.status_code"))?;

        if status_code == "OK" {
            Ok(Verdict::available())
        } else {
            Ok(Verdict::taken(Self::describe(&status_code)))
        }
    }

    fn token_request(&self) -> Option<RequestSpec> {
        Some(RequestSpec::get(format!("{}/accounts/signup", self.origin)))
    }

    fn extract_token(&self, response: &HttpResponse) -> Result<String, NameScanError> {
        response
            .cookie("xsrf_token")
            .map(|token| token.to_string())
            .ok_or_else(|| missing_field(&self.name, "xsrf_token cookie"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_status_codes() {
        let platform = SnapchatPlatform::new();

        let ok = r#"{"reference":{"status_code":"OK"}}"#;
        assert_eq!(
            platform.interpret(&HttpResponse::new(200, ok)).unwrap(),
            Verdict::available()
        );

        let taken = r#"{"reference":{"status_code":"TAKEN"}}"#;
        assert_eq!(
            platform.interpret(&HttpResponse::new(200, taken)).unwrap(),
            Verdict::taken("Username taken")
        );

        let short = r#"{"reference":{"status_code":"TOO_SHORT"}}"#;
        assert_eq!(
            platform.interpret(&HttpResponse::new(200, short)).unwrap().message,
            "Username too short"
        );
    }

    #[test]
    fn test_missing_reference_is_parse_error() {
        let platform = SnapchatPlatform::new();
        let err = platform
            .interpret(&HttpResponse::new(200, r#"{"suggestions":[]}"#))
            .unwrap_err();
        assert!(matches!(err, NameScanError::ParseError(_)));
    }

    #[test]
    fn test_extract_token() {
        let platform = SnapchatPlatform::new();
        let response =
            HttpResponse::new(200, "").with_header("set-cookie", "xsrf_token=snap42; Path=/");
        assert_eq!(platform.extract_token(&response).unwrap(), "snap42");
    }
}
