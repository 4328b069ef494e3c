// src/platforms/tumblr.rs
use crate::platforms::{missing_field, require_token, unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ValidateErrorResponse {
    errors: Vec<ValidateError>,
}

#[derive(Debug, Deserialize)]
struct ValidateError {
    detail: String,
}

/// Tumblr's registration validator, authorized by the public API token the
/// register page embeds in its bootstrap script.
#[derive(Debug, Clone)]
pub struct TumblrPlatform {
    name: String,
    origin: String,
}

impl Default for TumblrPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TumblrPlatform {
    pub fn new() -> Self {
        Self {
            name: "Tumblr".to_string(),
            origin: "https://www.tumblr.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for TumblrPlatform {
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
            "{}/api/v2/register/account/validate",
            self.origin
        ))
        .header("Authorization", format!("Bearer {}", token))
        .json(json!({
            "email": "",
            "username": username,
            "password": "",
            "tumblelog": username,
            "validation_type": "username",
        })))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        match response.status {
            200 => Ok(Verdict::available()),
            400 => {
                let parsed: ValidateErrorResponse = response.json()?;
                let first = parsed
                    .errors
                    .first()
                    .ok_or_else(|| missing_field(&self.name, "errors[0].detail"))?;
                Ok(Verdict::taken(first.detail.clone()))
            }
            status => Ok(unexpected_status(status)),
        }
    }

    fn token_request(&self) -> Option<RequestSpec> {
        Some(RequestSpec::get(format!("{}/register", self.origin)))
    }

    fn extract_token(&self, response: &HttpResponse) -> Result<String, NameScanError> {
        let re = Regex::new(r#""API_TOKEN"\s*:\s*"([^"]+)""#).map_err(|e| {
            NameScanError::PlatformDefinition {
                platform: self.name.clone(),
                message: format!("token pattern: {}", e),
            }
        })?;

        re.captures(&response.body)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| missing_field(&self.name, "API_TOKEN"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestBody;

    #[test]
    fn test_extract_token() {
        let platform = TumblrPlatform::new();
        let page = r#"<script>window['___INITIAL_STATE___'] = {"apiFetchStore":{"API_TOKEN":"tum-777","extraHeaders":{}}};</script>"#;
        assert_eq!(
            platform.extract_token(&HttpResponse::new(200, page)).unwrap(),
            "tum-777"
        );
    }

    #[test]
    fn test_request_is_bearer_json() {
        let platform = TumblrPlatform::new();
        let request = platform.availability_request("staff", Some("tum-777")).unwrap();
        assert!(request
            .headers
            .contains(&("Authorization".to_string(), "Bearer tum-777".to_string())));
        match request.body {
            RequestBody::Json(value) => assert_eq!(value["username"], "staff"),
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret() {
        let platform = TumblrPlatform::new();
        assert_eq!(
            platform.interpret(&HttpResponse::new(200, "{}")).unwrap(),
            Verdict::available()
        );

        let body = r#"{"errors":[{"title":"Bad Request","code":1003,"detail":"That's a good one, but it's taken"}]}"#;
        assert_eq!(
            platform.interpret(&HttpResponse::new(400, body)).unwrap(),
            Verdict::taken("That's a good one, but it's taken")
        );

        let err = platform
            .interpret(&HttpResponse::new(400, r#"{"errors":[]}"#))
            .unwrap_err();
        assert!(matches!(err, NameScanError::ParseError(_)));
    }
}
