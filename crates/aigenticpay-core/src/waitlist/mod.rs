//! Waitlist capture: modal state, payload, and delivery.
//!
//! ## Flow
//!
//! 1. [`WaitlistFlow::begin_submit`] validates the draft email and moves to in-flight
//! 2. [`WaitlistClient::submit`] delivers it (or simulates a delay without an endpoint)
//! 3. [`WaitlistFlow::complete`] moves to succeeded, unless the modal was closed meanwhile
//!
//! Delivery failures are logged and otherwise treated exactly like success.

mod client;
mod delivery;
mod flow;
mod submission;

pub use client::{DeliveryMode, Submitted, WaitlistClient};
pub use delivery::{DeliverySink, HttpSink, SimulatedSink};
pub use flow::{SubmissionState, SubmitTicket, WaitlistFlow};
pub use submission::{format_timestamp, Submission};
