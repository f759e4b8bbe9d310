//! Waitlist Modal Component
//!
//! Collects one email address. All state lives in the page's
//! [`WaitlistFlow`]; this component only renders it and forwards intents.

use dioxus::prelude::*;

use aigenticpay_core::{SubmissionState, WaitlistFlow};
use aigenticpay_ui::{Button, CloseButton, Input};

use crate::components::{Icon, IconKind};

/// Waitlist Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     WaitlistModal {
///         flow: page.read().waitlist.clone(),
///         on_close: move |_| page.write().close_waitlist(),
///         on_draft: move |v| page.write().waitlist.set_draft(v),
///         on_submit: submit,
///     }
/// }
/// ```
#[component]
pub fn WaitlistModal(
    /// Current modal state
    flow: WaitlistFlow,
    /// Close button, overlay click, or "Close" after success
    on_close: EventHandler<()>,
    /// Email input changed
    on_draft: EventHandler<String>,
    /// Form submitted (after native validation)
    on_submit: EventHandler<()>,
) -> Element {
    if !flow.is_open() {
        return rsx! {};
    }

    let in_flight = flow.state() == SubmissionState::InFlight;
    // The webview's own email check can be looser than ours
    let rejection = flow.rejection().map(|e| format!("Please enter a valid email: {}", e));

    rsx! {
        div { class: "modal-root",
            div {
                class: "modal-overlay",
                onclick: move |_| on_close.call(()),
            }

            div { class: "waitlist-modal",
                CloseButton { onclick: move |_| on_close.call(()) }

                if flow.state() == SubmissionState::Succeeded {
                    div { class: "waitlist-success",
                        div { class: "success-badge",
                            Icon { kind: IconKind::CheckCircle, class: "icon-lg".to_string() }
                        }
                        h3 { class: "modal-title", "You're on the list!" }
                        p { class: "modal-description",
                            "We've received your request. Our team will reach out shortly to schedule an enterprise briefing."
                        }
                        Button {
                            class: "w-full".to_string(),
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    }
                } else {
                    h3 { class: "modal-title", "Join the Waitlist" }
                    p { class: "modal-description",
                        "Be the first to deploy autonomous AI financial governance in your organization."
                    }

                    form {
                        class: "waitlist-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            on_submit.call(());
                        },

                        Input {
                            name: "email".to_string(),
                            input_type: "email".to_string(),
                            required: true,
                            disabled: in_flight,
                            label: "Work Email".to_string(),
                            placeholder: "name@company.com".to_string(),
                            value: flow.draft().to_string(),
                            oninput: move |value| on_draft.call(value),
                        }

                        if let Some(message) = rejection {
                            p { class: "input-error", role: "alert", "{message}" }
                        }

                        Button {
                            button_type: "submit".to_string(),
                            disabled: in_flight,
                            class: "w-full btn-tall".to_string(),
                            if in_flight {
                                span { class: "spinner" }
                            } else {
                                "Request Access"
                            }
                        }

                        p { class: "fine-print", "Enterprise Briefings Available Upon Request" }
                    }
                }
            }
        }
    }
}
