// src/platforms/mod.rs
use crate::types::{Config, HttpResponse, NameScanError, RequestSpec, Verdict};
use std::collections::HashSet;
use std::sync::Arc;

mod github;
mod gitlab;
mod instagram;
mod reddit;
mod snapchat;
mod steam;
mod tumblr;
mod twitter;

pub use github::GitHubPlatform;
pub use gitlab::GitLabPlatform;
pub use instagram::InstagramPlatform;
pub use reddit::RedditPlatform;
pub use snapchat::SnapchatPlatform;
pub use steam::SteamPlatform;
pub use tumblr::TumblrPlatform;
pub use twitter::TwitterPlatform;

/// Lookup keys of every supported platform, in registry order.
pub const PLATFORM_NAMES: &[&str] = &[
    "github",
    "gitlab",
    "instagram",
    "reddit",
    "snapchat",
    "steam",
    "tumblr",
    "twitter",
];

/// A site that can be asked whether a username is registered.
///
/// Implementations only describe requests and judge responses; the HTTP
/// exchange itself belongs to the checker.
pub trait Platform: Send + Sync {
    fn name(&self) -> &str;

    fn origin(&self) -> &str;

    fn requires_token(&self) -> bool {
        false
    }

    fn availability_request(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<RequestSpec, NameScanError>;

    fn interpret(&self, response: &HttpResponse) -> Result<Verdict, NameScanError>;

    fn token_request(&self) -> Option<RequestSpec> {
        None
    }

    fn extract_token(&self, _response: &HttpResponse) -> Result<String, NameScanError> {
        Err(NameScanError::PlatformDefinition {
            platform: self.name().to_string(),
            message: "platform does not use tokens".to_string(),
        })
    }
}

pub fn create_platform(name: &str, config: &Config) -> Option<Arc<dyn Platform>> {
    let key = name.to_lowercase();
    let origin = config.base_urls.get(&key).map(|url| url.trim_end_matches('/').to_string());

    macro_rules! build {
        ($platform:ty) => {{
            let platform = <$platform>::new();
            let platform = match origin {
                Some(origin) => platform.with_origin(origin),
                None => platform,
            };
            Some(Arc::new(platform) as Arc<dyn Platform>)
        }};
    }

    match key.as_str() {
        "github" => build!(GitHubPlatform),
        "gitlab" => build!(GitLabPlatform),
        "instagram" => build!(InstagramPlatform),
        "reddit" => build!(RedditPlatform),
        "snapchat" => build!(SnapchatPlatform),
        "steam" => build!(SteamPlatform),
        "tumblr" => build!(TumblrPlatform),
        "twitter" => build!(TwitterPlatform),
        _ => None,
    }
}

pub fn get_all_platforms(config: &Config) -> Vec<Arc<dyn Platform>> {
    PLATFORM_NAMES
        .iter()
        .filter_map(|name| create_platform(name, config))
        .collect()
}

pub fn is_known_platform(name: &str) -> bool {
    PLATFORM_NAMES.contains(&name.to_lowercase().as_str())
}

/// Turns a user-supplied restriction list into platforms.
///
/// An empty list selects every platform. Names are case-insensitive and
/// repeated names collapse into one entry.
pub fn resolve_platforms(
    restrict: &[String],
    config: &Config,
) -> Result<Vec<Arc<dyn Platform>>, NameScanError> {
    if restrict.is_empty() {
        return Ok(get_all_platforms(config));
    }

    let mut seen = HashSet::new();
    let mut platforms = Vec::new();
    for name in restrict {
        let platform = create_platform(name, config)
            .ok_or_else(|| NameScanError::InvalidPlatform(name.clone()))?;
        if seen.insert(name.to_lowercase()) {
            platforms.push(platform);
        }
    }
    Ok(platforms)
}

pub(crate) fn require_token<'a>(
    platform: &str,
    token: Option<&'a str>,
) -> Result<&'a str, NameScanError> {
    token.ok_or_else(|| NameScanError::PlatformDefinition {
        platform: platform.to_string(),
        message: "availability request built without a token".to_string(),
    })
}

/// Verdict for statuses a platform has no specific rule for.
pub(crate) fn unexpected_status(status: u16) -> Verdict {
    if status == 429 {
        Verdict::inconclusive("Rate limited")
    } else {
        Verdict::inconclusive(format!("Unexpected response (HTTP {})", status))
    }
}

pub(crate) fn missing_field(platform: &str, field: &str) -> NameScanError {
    NameScanError::ParseError(format!("{}: missing field `{}`", platform, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_platform() {
        let config = Config::default();

        let platform = create_platform("GitHub", &config);
        assert!(platform.is_some());
        assert_eq!(platform.unwrap().name(), "GitHub");

        assert!(create_platform("TWITTER", &config).is_some());
        assert!(create_platform("myspace", &config).is_none());
    }

    #[test]
    fn test_registry_names_are_unique_and_ordered() {
        let platforms = get_all_platforms(&Config::default());
        assert_eq!(platforms.len(), PLATFORM_NAMES.len());

        let names: Vec<String> = platforms.iter().map(|p| p.name().to_lowercase()).collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(names, PLATFORM_NAMES.to_vec());
    }

    #[test]
    fn test_resolve_platforms_rejects_unknown() {
        let config = Config::default();
        let restrict = vec!["reddit".to_string(), "friendster".to_string()];
        match resolve_platforms(&restrict, &config) {
            Err(NameScanError::InvalidPlatform(name)) => assert_eq!(name, "friendster"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected InvalidPlatform"),
        }
    }

    #[test]
    fn test_resolve_platforms_collapses_duplicates() {
        let config = Config::default();
        let restrict = vec!["Steam".to_string(), "steam".to_string(), "GitLab".to_string()];
        let platforms = resolve_platforms(&restrict, &config).unwrap();
        let names: Vec<&str> = platforms.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Steam", "GitLab"]);
    }

    #[test]
    fn test_origin_override() {
        let mut config = Config::default();
        config
            .base_urls
            .insert("gitlab".to_string(), "http://127.0.0.1:9000/".to_string());

        let platform = create_platform("gitlab", &config).unwrap();
        assert_eq!(platform.origin(), "http://127.0.0.1:9000");
        let request = platform.availability_request("alice", None).unwrap();
        assert_eq!(request.url, "http://127.0.0.1:9000/users/alice/exists");
    }

    #[test]
    fn test_token_platforms() {
        let token_platforms: Vec<String> = get_all_platforms(&Config::default())
            .iter()
            .filter(|p| p.requires_token())
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(token_platforms, vec!["GitHub", "Instagram", "Snapchat", "Tumblr"]);
    }

    #[test]
    fn test_rate_limit_is_inconclusive() {
        let verdict = unexpected_status(429);
        assert!(!verdict.success);
        assert_eq!(verdict.message, "Rate limited");
    }
}
