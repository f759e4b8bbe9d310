//! Delivery sinks for waitlist submissions.
//!
//! The endpoint is a webhook-style receiver whose response is opaque to the
//! page, so [`HttpSink`] only reports transport failures; status codes and
//! bodies are never read.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::submission::Submission;
use crate::error::DeliveryError;

/// Somewhere a submission can be sent.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    async fn deliver(&self, submission: &Submission) -> Result<(), DeliveryError>;
}

/// Form-encoded POST to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSink {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl DeliverySink for HttpSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&submission.form_fields())
            .send()
            .await?;

        // Fire-and-forget: the status says nothing reliable about delivery
        tracing::debug!(status = %response.status(), "Waitlist endpoint responded");
        Ok(())
    }
}

/// Stand-in used when no endpoint is configured: waits, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl DeliverySink for SimulatedSink {
    async fn deliver(&self, _submission: &Submission) -> Result<(), DeliveryError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailAddress;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sink_waits() {
        let sink = SimulatedSink::new(Duration::from_secs(1));
        let submission = Submission::new(EmailAddress::parse("a@b.co").unwrap(), "test");

        let started = tokio::time::Instant::now();
        sink.deliver(&submission).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_http_sink_reports_transport_failure() {
        // Reserve a port, then free it so the connection is refused
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let endpoint = Url::parse(&format!("http://127.0.0.1:{}/exec", port)).unwrap();
        let sink = HttpSink::new(endpoint);
        let submission = Submission::new(EmailAddress::parse("a@b.co").unwrap(), "test");

        let result = sink.deliver(&submission).await;
        assert!(matches!(result, Err(DeliveryError::Http(_))));
    }
}
