// src/engine.rs
use crate::cache::TokenCache;
use crate::checker::AvailabilityChecker;
use crate::platforms::Platform;
use crate::progress::ProgressReporter;
use crate::session::Session;
use crate::types::{Failure, NameScanError, QueryResult};
use crate::utils::deduplicate_usernames;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub cache_tokens: bool,
    pub available_only: bool,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Retained results per username, in completion order. Every requested
    /// username has an entry, possibly empty.
    pub results: HashMap<String, Vec<QueryResult>>,
    pub failures: Vec<Failure>,
    pub total_queries: usize,
    pub duration: Duration,
}

pub struct BatchRunner {
    session: Session,
    platforms: Vec<Arc<dyn Platform>>,
    options: RunOptions,
}

impl BatchRunner {
    pub fn new(session: Session, platforms: Vec<Arc<dyn Platform>>, options: RunOptions) -> Self {
        Self {
            session,
            platforms,
            options,
        }
    }

    /// Checks every username on every platform.
    ///
    /// Repeated usernames are checked once, so each (username, platform)
    /// pair yields exactly one result or failure.
    ///
    /// Network and parse failures are collected into the report. Any other
    /// error stops the run and is returned.
    pub async fn run(
        &self,
        usernames: &[String],
        progress: &dyn ProgressReporter,
    ) -> Result<BatchReport, NameScanError> {
        let start_time = Instant::now();
        let usernames = deduplicate_usernames(usernames.to_vec());
        let total = usernames.len() * self.platforms.len();

        let cache = if self.options.cache_tokens {
            info!("Prefetching tokens");
            progress.prefetch_started();
            TokenCache::prefetch(&self.platforms, &self.session).await
        } else {
            TokenCache::new()
        };

        info!(
            "Starting {} queries ({} usernames x {} platforms)",
            total,
            usernames.len(),
            self.platforms.len()
        );
        progress.started(total);

        let checker = AvailabilityChecker::new(self.session.clone());
        let mut pending = FuturesUnordered::new();

        for username in &usernames {
            for platform in &self.platforms {
                let checker = &checker;
                let cache = &cache;
                pending.push(async move {
                    let token = cache.token_for(platform.name());
                    let outcome = checker.check(username, platform.as_ref(), token).await;
                    (username, platform, outcome)
                });
            }
        }

        let mut results: HashMap<String, Vec<QueryResult>> = usernames
            .iter()
            .map(|username| (username.clone(), Vec::new()))
            .collect();
        let mut failures = Vec::new();
        let mut completed = 0;

        while let Some((username, platform, outcome)) = pending.next().await {
            completed += 1;
            progress.advanced(completed, total);

            match outcome {
                Ok(result) => {
                    if result.valid || !self.options.available_only {
                        results.entry(username.clone()).or_default().push(result);
                    }
                }
                Err(e) => match e.failure_kind() {
                    Some(kind) => failures.push(Failure {
                        kind,
                        platform: platform.name().to_string(),
                        username: username.clone(),
                        detail: e.detail(),
                    }),
                    None => {
                        progress.finished();
                        error!("{} on {}: {}", username, platform.name(), e);
                        return Err(e);
                    }
                },
            }
        }

        progress.finished();

        Ok(BatchReport {
            results,
            failures,
            total_queries: total,
            duration: start_time.elapsed(),
        })
    }
}
