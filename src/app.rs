use dioxus::prelude::*;

use aigenticpay_core::{PageState, WaitlistClient, ENDPOINT_ENV};

use crate::components::{use_viewport_watcher, BackToTop, Footer, NavHeader, WaitlistModal};
use crate::context::{get_waitlist_config, use_waitlist_client};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared waitlist client.
#[component]
pub fn App() -> Element {
    let client = use_hook(|| WaitlistClient::from_config(&get_waitlist_config()));
    use_context_provider(|| client);

    rsx! {
        style { {GLOBAL_STYLES} }
        PageShell {}
    }
}

/// Owns the page state and wires every component to it.
#[component]
fn PageShell() -> Element {
    let client = use_waitlist_client();
    let mut page = use_signal(PageState::new);

    use_viewport_watcher(page);

    let submit = move |_| {
        let ticket = match page.write().waitlist.begin_submit() {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::warn!("Waitlist submit rejected: {}", e);
                return;
            }
        };

        if cfg!(debug_assertions) && !client.is_configured() {
            spawn(async move {
                rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("AigenticPay")
                    .set_description(format!(
                        "Debug: {} is missing! Submissions are simulated.",
                        ENDPOINT_ENV
                    ))
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show()
                    .await;
            });
        }

        let client = client.clone();
        spawn(async move {
            let submitted = client.submit(ticket.email().clone()).await;
            if page.write().waitlist.complete(&ticket) {
                tracing::info!(simulated = submitted.was_simulated(), "Waitlist request accepted");
            }
        });
    };

    let state = page.read();
    let active = state.active_section();
    let menu_open = state.mobile_menu_open;
    let show_back_to_top = state.show_back_to_top;
    let flow = state.waitlist.clone();
    drop(state);

    rsx! {
        NavHeader {
            active,
            menu_open,
            on_join: move |_| page.write().open_waitlist(),
            on_toggle_menu: move |_| page.write().toggle_mobile_menu(),
            on_close_menu: move |_| page.write().close_mobile_menu(),
        }

        Landing { on_join: move |_| page.write().open_waitlist() }

        Footer {}

        if show_back_to_top {
            BackToTop {}
        }

        WaitlistModal {
            flow,
            on_close: move |_| page.write().close_waitlist(),
            on_draft: move |value: String| page.write().waitlist.set_draft(value),
            on_submit: submit,
        }
    }
}
