//! Waitlist configuration.
//!
//! The only external input is the destination URL, read from
//! `WAITLIST_API_URL`. Its absence is recoverable: submissions fall back to
//! a simulated delay so the page keeps the same timing without a backend.

use std::time::Duration;

use reqwest::Url;

use crate::error::{CoreError, CoreResult};

/// Environment variable holding the waitlist endpoint.
pub const ENDPOINT_ENV: &str = "WAITLIST_API_URL";

/// Source tag sent with every submission.
pub const DEFAULT_SOURCE: &str = "AigenticPay Website";

/// Delay used in place of a real request when no endpoint is configured.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistConfig {
    /// Destination for form-encoded submissions, if any
    pub endpoint: Option<Url>,
    /// Fixed tag identifying the origin page
    pub source: String,
    /// Stand-in delay when `endpoint` is absent
    pub simulated_delay: Duration,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            source: DEFAULT_SOURCE.to_string(),
            simulated_delay: DEFAULT_SIMULATED_DELAY,
        }
    }
}

impl WaitlistConfig {
    /// Build from `WAITLIST_API_URL`.
    pub fn from_env() -> Self {
        let raw = std::env::var(ENDPOINT_ENV).ok();
        Self::default().with_endpoint(raw.as_deref())
    }

    /// Set the endpoint from a raw value.
    ///
    /// Empty values count as absent. Unparsable values are logged and
    /// treated as absent rather than failing startup.
    pub fn with_endpoint(mut self, raw: Option<&str>) -> Self {
        self.endpoint = match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(value) => match parse_endpoint(value) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", ENDPOINT_ENV, e);
                    None
                }
            },
        };
        self
    }

    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

/// Parse an endpoint URL, accepting only http(s).
pub fn parse_endpoint(raw: &str) -> CoreResult<Url> {
    let url = Url::parse(raw).map_err(|e| CoreError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CoreError::InvalidEndpoint(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WaitlistConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.source, "AigenticPay Website");
        assert_eq!(config.simulated_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_empty_endpoint_is_absent() {
        let config = WaitlistConfig::default().with_endpoint(Some("   "));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_valid_endpoint() {
        let config = WaitlistConfig::default()
            .with_endpoint(Some("https://script.example.com/macros/s/abc/exec"));
        assert_eq!(
            config.endpoint.unwrap().as_str(),
            "https://script.example.com/macros/s/abc/exec"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_absent() {
        assert!(WaitlistConfig::default()
            .with_endpoint(Some("not a url"))
            .endpoint
            .is_none());
        assert!(WaitlistConfig::default()
            .with_endpoint(Some("ftp://example.com/drop"))
            .endpoint
            .is_none());
    }

    #[test]
    fn test_parse_endpoint_errors() {
        assert!(matches!(
            parse_endpoint("mailto:someone@example.com"),
            Err(CoreError::InvalidEndpoint(_))
        ));
    }
}
