//! Waitlist submission with masked failures.
//!
//! [`WaitlistClient::submit`] always resolves to [`Submitted`]. Because the
//! endpoint's response is unobservable, a transport error cannot be told
//! apart from a rejected submission, so neither is shown to the person
//! submitting. Failures go to the log instead.

use std::sync::Arc;

use super::delivery::{DeliverySink, HttpSink, SimulatedSink};
use super::submission::Submission;
use crate::config::{WaitlistConfig, ENDPOINT_ENV};
use crate::email::EmailAddress;

/// How a submission was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Sent to the configured endpoint (outcome unknown)
    Endpoint,
    /// No endpoint configured; simulated delay only
    Simulated,
}

/// Outcome of a submission as seen by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submitted {
    pub mode: DeliveryMode,
}

impl Submitted {
    pub fn was_simulated(&self) -> bool {
        self.mode == DeliveryMode::Simulated
    }
}

#[derive(Clone)]
pub struct WaitlistClient {
    endpoint: Option<Arc<dyn DeliverySink>>,
    fallback: SimulatedSink,
    source: String,
}

impl std::fmt::Debug for WaitlistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistClient")
            .field("configured", &self.is_configured())
            .field("fallback", &self.fallback)
            .field("source", &self.source)
            .finish()
    }
}

impl WaitlistClient {
    pub fn from_config(config: &WaitlistConfig) -> Self {
        let endpoint = config
            .endpoint
            .clone()
            .map(|url| Arc::new(HttpSink::new(url)) as Arc<dyn DeliverySink>);

        Self {
            endpoint,
            fallback: SimulatedSink::new(config.simulated_delay),
            source: config.source.clone(),
        }
    }

    /// Use a custom sink in place of the HTTP endpoint.
    pub fn with_sink(mut self, sink: Arc<dyn DeliverySink>) -> Self {
        self.endpoint = Some(sink);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Submit an email. Never fails from the caller's point of view.
    pub async fn submit(&self, email: EmailAddress) -> Submitted {
        let submission = Submission::new(email, self.source.clone());

        let Some(sink) = &self.endpoint else {
            tracing::error!(
                "Waitlist endpoint is not configured; set {} to collect submissions",
                ENDPOINT_ENV
            );
            // Infallible, but keep the sink contract
            if let Err(e) = self.fallback.deliver(&submission).await {
                tracing::error!("Simulated waitlist delivery failed: {}", e);
            }
            return Submitted {
                mode: DeliveryMode::Simulated,
            };
        };

        match sink.deliver(&submission).await {
            Ok(()) => tracing::info!(source = %submission.source, "Waitlist submission sent"),
            Err(e) => tracing::error!("Waitlist submission error: {}", e),
        }

        Submitted {
            mode: DeliveryMode::Endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_endpoint() {
        let client = WaitlistClient::from_config(&WaitlistConfig::default());
        assert!(!client.is_configured());
        assert_eq!(client.source(), "AigenticPay Website");
    }

    #[test]
    fn test_from_config_with_endpoint() {
        let config = WaitlistConfig::default().with_endpoint(Some("https://hooks.example.com/w"));
        let client = WaitlistClient::from_config(&config);
        assert!(client.is_configured());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unconfigured_submit_is_simulated() {
        let client = WaitlistClient::from_config(&WaitlistConfig::default());
        let submitted = client
            .submit(EmailAddress::parse("name@company.com").unwrap())
            .await;
        assert!(submitted.was_simulated());
    }
}
