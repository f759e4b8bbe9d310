//! AigenticPay UI Components
//!
//! Dioxus primitives shared by the landing page, following its clean
//! light aesthetic:
//! - **Ink (#0f172a)**: Text, primary buttons
//! - **Emerald (#059669)**: Active navigation, focus rings, confirmations
//! - **Surface (#ffffff / #f8fafc)**: Backgrounds
//!
//! Class names here are styled by the page's global stylesheet.

pub mod components;

pub use components::*;
