//! Context providers for the AigenticPay page.
//!
//! The page state lives in one signal owned by the root page shell. Child
//! components never write it directly; they receive values as props and
//! request changes through callbacks. The waitlist client is shared
//! read-only through context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let client = use_waitlist_client();
//! let submitted = client.submit(email).await;
//! ```

use dioxus::prelude::*;

use aigenticpay_core::{WaitlistClient, WaitlistConfig};

/// Get the waitlist configuration resolved at startup.
pub fn get_waitlist_config() -> WaitlistConfig {
    crate::get_waitlist_config()
}

/// Hook to access the waitlist client from context.
pub fn use_waitlist_client() -> WaitlistClient {
    use_context::<WaitlistClient>()
}
