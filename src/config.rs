use crate::platforms::is_known_platform;
use crate::types::{Config, FileConfig, NameScanError};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Builds the run configuration: defaults, then the optional TOML file, then
/// environment overrides.
pub fn load_config(config_path: Option<&Path>) -> Result<Config, NameScanError> {
    let mut config = Config::default();

    if let Some(path) = config_path {
        let contents = fs::read_to_string(path).map_err(|e| {
            NameScanError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file_config = parse_config(&contents)?;
        apply_file_config(&mut config, file_config);
    }

    apply_env_overrides(&mut config)?;
    validate_config(&config)?;

    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FileConfig, NameScanError> {
    toml::from_str(contents)
        .map_err(|e| NameScanError::ConfigError(format!("Failed to parse configuration: {}", e)))
}

fn apply_file_config(config: &mut Config, file_config: FileConfig) {
    if let Some(timeout_ms) = file_config.timeout_ms {
        config.timeout = Duration::from_millis(timeout_ms);
    }
    if let Some(user_agent) = file_config.user_agent {
        config.user_agent = user_agent;
    }
    if let Some(proxy) = file_config.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(pool) = file_config.pool_max_idle_per_host {
        config.pool_max_idle_per_host = pool;
    }
    for (platform, origin) in file_config.base_urls {
        config.base_urls.insert(platform.to_lowercase(), origin);
    }
}

fn apply_env_overrides(config: &mut Config) -> Result<(), NameScanError> {
    if let Ok(value) = env::var("NAMESCAN_TIMEOUT_MS") {
        let timeout_ms = value.trim().parse::<u64>().map_err(|e| {
            NameScanError::ConfigError(format!("NAMESCAN_TIMEOUT_MS must be an integer: {}", e))
        })?;
        config.timeout = Duration::from_millis(timeout_ms);
    }
    if let Ok(proxy) = env::var("NAMESCAN_PROXY") {
        config.proxy = Some(proxy);
    }
    if let Ok(user_agent) = env::var("NAMESCAN_USER_AGENT") {
        config.user_agent = user_agent;
    }
    Ok(())
}

pub fn validate_config(config: &Config) -> Result<(), NameScanError> {
    if config.timeout.is_zero() {
        return Err(NameScanError::ConfigError(
            "timeout must be greater than 0".to_string(),
        ));
    }
    for (platform, origin) in &config.base_urls {
        if !is_known_platform(platform) {
            return Err(NameScanError::ConfigError(format!(
                "base_urls: {} is not a valid platform",
                platform
            )));
        }
        Url::parse(origin).map_err(|e| {
            NameScanError::ConfigError(format!("base_urls.{}: invalid URL {}: {}", platform, origin, e))
        })?;
    }
    Ok(())
}
