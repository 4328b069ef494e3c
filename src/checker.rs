// src/checker.rs
use crate::cache::fetch_token;
use crate::platforms::Platform;
use crate::session::Session;
use crate::types::{NameScanError, QueryResult};
use log::debug;

/// Runs single (username, platform) availability checks.
#[derive(Clone)]
pub struct AvailabilityChecker {
    session: Session,
}

impl AvailabilityChecker {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Checks `username` on `platform`.
    ///
    /// Token platforms use `cached_token` when given and otherwise fetch a
    /// fresh token first. Network and parse problems come back as errors whose
    /// [`NameScanError::failure_kind`] is set; any other error is a defect.
    pub async fn check(
        &self,
        username: &str,
        platform: &dyn Platform,
        cached_token: Option<&str>,
    ) -> Result<QueryResult, NameScanError> {
        let fetched;
        let token = if !platform.requires_token() {
            None
        } else if let Some(token) = cached_token {
            Some(token)
        } else {
            fetched = fetch_token(platform, &self.session).await?;
            Some(fetched.as_str())
        };

        let request = platform.availability_request(username, token)?;
        let response = self.session.execute(&request).await?;
        let verdict = platform.interpret(&response)?;

        debug!(
            "{} on {}: valid={} success={} ({})",
            username,
            platform.name(),
            verdict.valid,
            verdict.success,
            verdict.message
        );

        Ok(QueryResult::new(username, platform.name(), verdict))
    }
}
