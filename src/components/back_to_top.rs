//! Floating back-to-top control, shown once the page is scrolled past
//! the hero.

use dioxus::prelude::*;

use crate::components::viewport::scroll_to_top;
use crate::components::{Icon, IconKind};

#[component]
pub fn BackToTop() -> Element {
    rsx! {
        button {
            class: "back-to-top",
            "aria-label": "Back to top",
            onclick: move |_| scroll_to_top(),
            Icon { kind: IconKind::ArrowUp }
        }
    }
}
