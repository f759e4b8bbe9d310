//! Hover-revealed detail cards for use cases.

use dioxus::prelude::*;

use crate::content::CaseDetails;

/// Where the popup opens relative to its card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopupPlacement {
    Below,
    /// Bottom rows open upwards so the popup stays on screen
    Above,
}

impl PopupPlacement {
    /// Placement for the card at `index`, flipping upwards from `first_above`.
    pub fn for_index(index: usize, first_above: usize) -> Self {
        if index >= first_above {
            PopupPlacement::Above
        } else {
            PopupPlacement::Below
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PopupPlacement::Below => "below",
            PopupPlacement::Above => "above",
        }
    }
}

/// Card that reveals a detailed scenario on hover.
///
/// `children` is the always-visible summary.
#[component]
pub fn DetailCard(
    /// Popup badge text, e.g. "Detailed Use Case"
    badge: &'static str,
    /// Heading for the approach block
    approach_label: &'static str,
    details: &'static CaseDetails,
    placement: PopupPlacement,
    children: Element,
) -> Element {
    let mut revealed = use_signal(|| false);

    let popup_class = format!(
        "detail-popup {}{}",
        placement.class(),
        if revealed() { " visible" } else { "" }
    );

    rsx! {
        div {
            class: "detail-card",
            onmouseenter: move |_| revealed.set(true),
            onmouseleave: move |_| revealed.set(false),

            {children}

            div { class: "{popup_class}",
                div { class: "detail-popup-inner",
                    div { class: "detail-badge",
                        span { class: "detail-dot" }
                        span { "{badge}" }
                    }
                    div { class: "detail-block",
                        h5 { "Scenario" }
                        p { "{details.scenario}" }
                    }
                    div { class: "detail-block",
                        h5 { "Risk" }
                        p { "{details.risk}" }
                    }
                    div { class: "detail-block highlight",
                        h5 { "{approach_label}" }
                        p { "{details.approach}" }
                    }
                    div { class: "detail-outcome", "Outcome: {details.outcome}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterprise_bottom_row_opens_above() {
        let placements: Vec<_> = (0..6).map(|i| PopupPlacement::for_index(i, 4)).collect();
        assert_eq!(&placements[..4], &[PopupPlacement::Below; 4]);
        assert_eq!(&placements[4..], &[PopupPlacement::Above; 2]);
    }

    #[test]
    fn placement_classes() {
        assert_eq!(PopupPlacement::Below.class(), "below");
        assert_eq!(PopupPlacement::Above.class(), "above");
    }
}
