// src/cache.rs
use crate::platforms::Platform;
use crate::session::Session;
use crate::types::NameScanError;
use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TokenCacheEntry {
    pub platform: String,
    pub token: String,
    pub fetched_at: DateTime<Utc>,
}

/// Tokens fetched once per run, keyed by lowercase platform name.
///
/// Filled by [`TokenCache::prefetch`] before any availability check starts and
/// only read afterwards.
#[derive(Debug, Default)]
pub struct TokenCache {
    entries: HashMap<String, TokenCacheEntry>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a token for every platform that needs one, all at once.
    ///
    /// A failed fetch is logged and leaves that platform without an entry.
    pub async fn prefetch(platforms: &[Arc<dyn Platform>], session: &Session) -> Self {
        let mut pending = FuturesUnordered::new();

        for platform in platforms.iter().filter(|p| p.requires_token()) {
            pending.push(async move {
                let result = fetch_token(platform.as_ref(), session).await;
                (platform, result)
            });
        }

        let mut cache = Self::new();
        while let Some((platform, result)) = pending.next().await {
            match result {
                Ok(token) => {
                    info!("{}: token cached", platform.name());
                    cache.insert(platform.name(), token);
                }
                Err(e) => {
                    warn!("{}: failed to prefetch token: {}", platform.name(), e.detail());
                }
            }
        }

        cache
    }

    pub fn insert(&mut self, platform: &str, token: String) {
        self.entries.insert(
            platform.to_lowercase(),
            TokenCacheEntry {
                platform: platform.to_string(),
                token,
                fetched_at: Utc::now(),
            },
        );
    }

    pub fn get(&self, platform: &str) -> Option<&TokenCacheEntry> {
        self.entries.get(&platform.to_lowercase())
    }

    pub fn token_for(&self, platform: &str) -> Option<&str> {
        self.get(platform).map(|entry| entry.token.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One token round trip for `platform`.
pub async fn fetch_token(platform: &dyn Platform, session: &Session) -> Result<String, NameScanError> {
    let request = platform
        .token_request()
        .ok_or_else(|| NameScanError::PlatformDefinition {
            platform: platform.name().to_string(),
            message: "requires a token but defines no token request".to_string(),
        })?;

    let response = session.execute(&request).await?;
    platform.extract_token(&response)
}
