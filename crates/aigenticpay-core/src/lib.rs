//! AigenticPay Core Library
//!
//! UI-independent logic behind the AigenticPay landing page.
//!
//! ## Overview
//!
//! Two independent mechanisms, both feeding a single [`PageState`]:
//!
//! - **Active-section tracking**: which named region sits in the viewport's
//!   trigger band, for navigation highlighting ([`tracker`])
//! - **Waitlist capture**: a modal that collects one email address and
//!   forwards it to an external endpoint, always reporting success to the
//!   person submitting ([`waitlist`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use aigenticpay_core::{PageState, WaitlistClient, WaitlistConfig};
//!
//! let client = WaitlistClient::from_config(&WaitlistConfig::from_env());
//! let mut page = PageState::new();
//!
//! page.open_waitlist();
//! page.waitlist.set_draft("name@company.com");
//! let ticket = page.waitlist.begin_submit()?;
//! client.submit(ticket.email().clone()).await;
//! page.waitlist.complete(&ticket);
//! ```

pub mod config;
pub mod email;
pub mod error;
pub mod page;
pub mod section;
pub mod tracker;
pub mod waitlist;

// Re-exports
pub use config::{WaitlistConfig, DEFAULT_SOURCE, ENDPOINT_ENV};
pub use email::EmailAddress;
pub use error::{CoreError, CoreResult, DeliveryError, EmailError};
pub use page::{PageState, BACK_TO_TOP_THRESHOLD};
pub use section::SectionId;
pub use tracker::{IntersectionEntry, RegionExtent, ScrollWatcher, SectionTracker, TriggerBand};
pub use waitlist::{
    DeliveryMode, DeliverySink, HttpSink, SimulatedSink, Submission, SubmissionState,
    SubmitTicket, Submitted, WaitlistClient, WaitlistFlow,
};
