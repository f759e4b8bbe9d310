//! Waitlist capture flow tests
//!
//! Drives the modal state machine together with the client, using
//! recording and failing sinks in place of the external endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use aigenticpay_core::{
    CoreError, DeliveryError, DeliveryMode, DeliverySink, EmailError, PageState, Submission,
    SubmissionState, WaitlistClient, WaitlistConfig,
};
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Test Utilities
// ============================================================================

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Sink that records every submission it receives
#[derive(Default)]
struct RecordingSink {
    received: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

#[async_trait]
impl DeliverySink for RecordingSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), DeliveryError> {
        self.received.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Sink that always fails after an optional delay
struct FailingSink {
    calls: AtomicUsize,
    delay: Duration,
}

impl FailingSink {
    fn new(delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay,
        }
    }
}

#[async_trait]
impl DeliverySink for FailingSink {
    async fn deliver(&self, _submission: &Submission) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Err(DeliveryError::Other("connection reset".to_string()))
    }
}

fn unconfigured_client() -> WaitlistClient {
    WaitlistClient::from_config(&WaitlistConfig::default())
}

/// Run the full submit path the way the page does.
async fn submit_via_page(
    page: &mut PageState,
    client: &WaitlistClient,
    email: &str,
) -> Result<(), CoreError> {
    page.waitlist.set_draft(email);
    let ticket = page.waitlist.begin_submit()?;
    client.submit(ticket.email().clone()).await;
    page.waitlist.complete(&ticket);
    Ok(())
}

// ============================================================================
// Opening and Validation
// ============================================================================

#[test]
fn test_open_resets_state_and_draft() {
    let mut page = PageState::new();
    page.open_waitlist();
    page.waitlist.set_draft("half-typed@");
    page.close_waitlist();

    page.open_waitlist();
    assert!(page.waitlist.is_open());
    assert_eq!(page.waitlist.state(), SubmissionState::Idle);
    assert_eq!(page.waitlist.draft(), "");
}

#[tokio::test]
async fn test_reopen_after_success_starts_idle() {
    init_logging();
    let sink = Arc::new(RecordingSink::default());
    let client = unconfigured_client().with_sink(sink.clone());
    let mut page = PageState::new();

    page.open_waitlist();
    submit_via_page(&mut page, &client, "name@company.com").await.unwrap();
    assert_eq!(page.waitlist.state(), SubmissionState::Succeeded);

    page.close_waitlist();
    page.open_waitlist();
    assert_eq!(page.waitlist.state(), SubmissionState::Idle);
    assert_eq!(page.waitlist.draft(), "");
}

#[tokio::test]
async fn test_invalid_email_never_reaches_sink() {
    let sink = Arc::new(RecordingSink::default());
    let client = unconfigured_client().with_sink(sink.clone());
    let mut page = PageState::new();
    page.open_waitlist();

    for bad in ["", "plainaddress", "@no-local.com", "spaces in@x.com", "trailing@dot."] {
        let err = submit_via_page(&mut page, &client, bad).await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidEmail(_)), "{bad:?} should be rejected");
        assert_eq!(page.waitlist.state(), SubmissionState::Idle);
    }

    assert_eq!(sink.count(), 0);
}

#[test]
fn test_empty_email_reports_required() {
    let mut page = PageState::new();
    page.open_waitlist();
    let err = page.waitlist.begin_submit().unwrap_err();
    assert!(matches!(err, CoreError::InvalidEmail(EmailError::Empty)));
}

// ============================================================================
// Delivery
// ============================================================================

#[tokio::test]
async fn test_configured_submit_sends_exactly_one_request() {
    init_logging();
    let sink = Arc::new(RecordingSink::default());
    let client = unconfigured_client().with_sink(sink.clone());
    let mut page = PageState::new();

    page.open_waitlist();
    submit_via_page(&mut page, &client, "name@company.com").await.unwrap();

    assert_eq!(page.waitlist.state(), SubmissionState::Succeeded);
    let received = sink.received.lock().unwrap();
    assert_eq!(received.len(), 1);

    let fields = received[0].form_fields();
    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ["email", "timestamp", "source"]);
    assert_eq!(fields[0].1, "name@company.com");
    assert!(!fields[1].1.is_empty());
    assert_eq!(fields[2].1, "AigenticPay Website");
}

#[tokio::test(start_paused = true)]
async fn test_unconfigured_submit_succeeds_after_simulated_delay() {
    init_logging();
    let client = unconfigured_client();
    let mut page = PageState::new();
    page.open_waitlist();

    let started = tokio::time::Instant::now();
    page.waitlist.set_draft("name@company.com");
    let ticket = page.waitlist.begin_submit().unwrap();
    let submitted = client.submit(ticket.email().clone()).await;
    assert!(page.waitlist.complete(&ticket));

    assert_eq!(submitted.mode, DeliveryMode::Simulated);
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(page.waitlist.state(), SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn test_failures_are_masked_as_success() {
    init_logging();
    for delay in [Duration::ZERO, Duration::from_millis(250), Duration::from_secs(30)] {
        let sink = Arc::new(FailingSink::new(delay));
        let client = unconfigured_client().with_sink(sink.clone());
        let mut page = PageState::new();
        page.open_waitlist();

        submit_via_page(&mut page, &client, "name@company.com").await.unwrap();

        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(page.waitlist.state(), SubmissionState::Succeeded);
    }
}

#[tokio::test]
async fn test_http_endpoint_receives_form_fields() {
    init_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(body) = complete_body(&buf) {
                socket
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
                    .await
                    .unwrap();
                return body;
            }
        }
        panic!("connection closed before request completed");
    });

    let config = WaitlistConfig::default().with_endpoint(Some(&format!("http://{}/exec", addr)));
    let client = WaitlistClient::from_config(&config);
    let mut page = PageState::new();
    page.open_waitlist();
    submit_via_page(&mut page, &client, "name@company.com").await.unwrap();

    let body = server.await.unwrap();
    let url = reqwest::Url::parse(&format!("http://localhost/?{}", body)).unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], ("email".to_string(), "name@company.com".to_string()));
    assert_eq!(pairs[1].0, "timestamp");
    assert_eq!(pairs[2], ("source".to_string(), "AigenticPay Website".to_string()));
    assert_eq!(page.waitlist.state(), SubmissionState::Succeeded);
}

/// Returns the body once headers and `content-length` bytes have arrived
fn complete_body(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let (head, body) = text.split_once("\r\n\r\n")?;
    let length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    (body.len() >= length).then(|| body[..length].to_string())
}

// ============================================================================
// Closing Mid-Flight
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_stale_completion_does_not_revive_success() {
    init_logging();
    let sink = Arc::new(FailingSink::new(Duration::from_secs(5)));
    let client = unconfigured_client().with_sink(sink.clone());
    let mut page = PageState::new();

    page.open_waitlist();
    page.waitlist.set_draft("name@company.com");
    let ticket = page.waitlist.begin_submit().unwrap();
    assert_eq!(page.waitlist.state(), SubmissionState::InFlight);

    let pending = tokio::spawn({
        let client = client.clone();
        let email = ticket.email().clone();
        async move { client.submit(email).await }
    });

    // Close and reopen while the request is still running
    page.close_waitlist();
    page.open_waitlist();
    assert_eq!(page.waitlist.state(), SubmissionState::Idle);

    pending.await.unwrap();
    assert!(!page.waitlist.complete(&ticket));
    assert_eq!(page.waitlist.state(), SubmissionState::Idle);
    assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_completion_after_close_is_tolerated() {
    let client = unconfigured_client();
    let mut page = PageState::new();

    page.open_waitlist();
    page.waitlist.set_draft("name@company.com");
    let ticket = page.waitlist.begin_submit().unwrap();
    page.close_waitlist();

    client.submit(ticket.email().clone()).await;
    assert!(!page.waitlist.complete(&ticket));
    assert!(!page.waitlist.is_open());
    assert_eq!(page.waitlist.state(), SubmissionState::Idle);
}
