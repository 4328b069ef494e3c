// src/session.rs
use crate::types::{Config, HttpResponse, NameScanError, RequestBody, RequestSpec};
use log::debug;
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct Session {
    pub client: Client,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, NameScanError> {
        // The cookie store carries token cookies from the prefetch into later checks
        let mut client_builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .cookie_store(true)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| NameScanError::ConfigError(format!("Invalid proxy URL: {}", e)))?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder
            .build()
            .map_err(|e| NameScanError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Session { client })
    }

    /// Sends `request` and reads the whole response.
    pub async fn execute(&self, request: &RequestSpec) -> Result<HttpResponse, NameScanError> {
        let mut builder = self.client.request(request.method.clone(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Json(value) => builder.json(value),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| classify(e, &request.url))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| classify(e, &request.url))?;

        debug!("{} {} -> {}", request.method, request.url, status);

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn classify(error: reqwest::Error, url: &str) -> NameScanError {
    if error.is_timeout() {
        NameScanError::TimeoutError(format!("{}: {}", url, error))
    } else if error.is_builder() {
        NameScanError::PlatformDefinition {
            platform: url.to_string(),
            message: format!("invalid request: {}", error),
        }
    } else {
        NameScanError::NetworkError(format!("{}: {}", url, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FailureKind;

    #[tokio::test]
    async fn test_malformed_url_is_a_defect() {
        let session = Session::new(&Config::default()).unwrap();
        let err = session
            .execute(&RequestSpec::get("not a url"))
            .await
            .unwrap_err();
        assert_eq!(err.failure_kind(), None);
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() {
        let session = Session::new(&Config::default()).unwrap();
        let err = session
            .execute(&RequestSpec::get("http://127.0.0.1:1/"))
            .await
            .unwrap_err();
        assert_eq!(err.failure_kind(), Some(FailureKind::NetworkError));
    }
}
