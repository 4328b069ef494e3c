// src/platforms/instagram.rs
use crate::platforms::{missing_field, require_token, unexpected_status, Platform};
use crate::types::{HttpResponse, NameScanError, RequestSpec, Verdict};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct AttemptResponse {
    status: String,
    errors: HashMap<String, Vec<AttemptError>>,
}

#[derive(Debug, Deserialize)]
struct AttemptError {
    message: String,
}

/// Instagram's signup dry run. Needs the `csrftoken` cookie handed out by the
/// signup page, echoed back in the `X-CSRFToken` header.
#[derive(Debug, Clone)]
pub struct InstagramPlatform {
    name: String,
    origin: String,
}

impl Default for InstagramPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl InstagramPlatform {
    pub fn new() -> Self {
        Self {
            name: "Instagram".to_string(),
            origin: "https://www.instagram.com".to_string(),
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}

impl Platform for InstagramPlatform {
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
            "{}/api/v1/web/accounts/web_create_ajax/attempt/",
            self.origin
        ))
        .header("X-CSRFToken", token)
        .header("X-Requested-With", "XMLHttpRequest")
        .header("Referer", format!("{}/accounts/emailsignup/", self.origin))
        .form(&[
            ("email", ""),
            ("username", username),
            ("first_name", ""),
            ("opt_into_one_tap", "false"),
        ]))
    }

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError> {
        // Validation errors come back as 400 with the same JSON shape
        if response.status != 200 && response.status != 400 {
            return Ok(unexpected_status(response.status));
        }

        let parsed: AttemptResponse = response.json()?;
        if parsed.status != "ok" && parsed.status != "fail" {
            return Ok(Verdict::inconclusive(format!(
                "Unexpected status `{}`",
                parsed.status
            )));
        }

        match parsed.errors.get("username") {
            Some(errors) => {
                let first = errors
                    .first()
                    .ok_or_else(|| missing_field(&self.name, "errors.username[0]"))?;
                Ok(Verdict::taken(first.message.clone()))
            }
            None => Ok(Verdict::available()),
        }
    }

    fn token_request(&self) -> Option<RequestSpec> {
        Some(RequestSpec::get(format!("{}/accounts/emailsignup/", self.origin)))
    }

    fn extract_token(&self, response: &HttpResponse) -> Result<String, NameScanError> {
        response
            .cookie("csrftoken")
            .map(|token| token.to_string())
            .ok_or_else(|| missing_field(&self.name, "csrftoken cookie"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FailureKind;

    #[test]
    fn test_extract_token_from_cookie() {
        let platform = InstagramPlatform::new();
        let response = HttpResponse::new(200, "<html></html>")
            .with_header("set-cookie", "csrftoken=XyZ; Max-Age=31449600; Path=/; Secure");
        assert_eq!(platform.extract_token(&response).unwrap(), "XyZ");

        let bare = HttpResponse::new(200, "<html></html>");
        assert!(matches!(
            platform.extract_token(&bare),
            Err(NameScanError::ParseError(_))
        ));
    }

    #[test]
    fn test_request_sets_csrf_header() {
        let platform = InstagramPlatform::new();
        let request = platform.availability_request("alice", Some("XyZ")).unwrap();
        assert!(request
            .headers
            .contains(&("X-CSRFToken".to_string(), "XyZ".to_string())));
    }

    #[test]
    fn test_interpret_taken() {
        let platform = InstagramPlatform::new();
        let body = r#"{"status":"fail","errors":{"username":[{"message":"A user with that username already exists.","code":"username_is_taken"}]}}"#;
        let verdict = platform.interpret(&HttpResponse::new(400, body)).unwrap();
        assert_eq!(
            verdict,
            Verdict::taken("A user with that username already exists.")
        );
    }

    #[test]
    fn test_interpret_available() {
        let platform = InstagramPlatform::new();
        let body = r#"{"status":"ok","errors":{"email":[{"message":"Enter a valid email address."}]}}"#;
        let verdict = platform.interpret(&HttpResponse::new(200, body)).unwrap();
        assert_eq!(verdict, Verdict::available());
    }

    #[test]
    fn test_interpret_missing_status() {
        let platform = InstagramPlatform::new();
        let err = platform
            .interpret(&HttpResponse::new(200, r#"{"errors":{}}"#))
            .unwrap_err();
        assert!(matches!(err, NameScanError::JsonParseError(..)));
    }

    #[test]
    fn test_throttle_reply_is_parse_error() {
        let platform = InstagramPlatform::new();
        let body = r#"{"message":"Please wait a few minutes before you try again.","spam":true,"status":"fail"}"#;
        let err = platform
            .interpret(&HttpResponse::new(400, body))
            .unwrap_err();
        assert_eq!(err.failure_kind(), Some(FailureKind::ParseError));
    }
}
