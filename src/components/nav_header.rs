//! Navigation Header Component
//!
//! Desktop: logo, section links with the active one highlighted, waitlist button
//! Mobile: logo and a menu toggle revealing the same links stacked

use dioxus::prelude::*;

use aigenticpay_core::SectionId;
use aigenticpay_ui::{Button, IconButton};

use crate::components::viewport::{scroll_to_section, scroll_to_top};
use crate::components::{Icon, IconKind};

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Section currently in the trigger band, if any
    pub active: Option<SectionId>,
    /// Whether the mobile menu is expanded
    pub menu_open: bool,
    /// Open the waitlist modal
    pub on_join: EventHandler<()>,
    /// Flip the mobile menu
    pub on_toggle_menu: EventHandler<()>,
    /// Collapse the mobile menu
    pub on_close_menu: EventHandler<()>,
}

fn link_class(base: &str, active: Option<SectionId>, id: SectionId) -> String {
    if active == Some(id) {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

/// Fixed top navigation bar
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let on_join = props.on_join;
    let on_close_menu = props.on_close_menu;
    let on_toggle_menu = props.on_toggle_menu;

    rsx! {
        nav { class: "nav-header",
            div { class: "nav-inner",
                button {
                    class: "nav-logo",
                    onclick: move |_| scroll_to_top(),
                    span { class: "logo-mark",
                        Icon { kind: IconKind::Shield, class: "icon-sm".to_string() }
                    }
                    span { class: "logo-text", "AigenticPay" }
                }

                div { class: "nav-links",
                    for id in SectionId::ALL {
                        a {
                            key: "{id}",
                            href: "#{id}",
                            class: link_class("nav-link", props.active, id),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                scroll_to_section(id);
                            },
                            "{id.label()}"
                        }
                    }
                    Button {
                        class: "btn-small".to_string(),
                        onclick: move |_| on_join.call(()),
                        "Join Waitlist"
                    }
                }

                IconButton {
                    class: "nav-menu-toggle".to_string(),
                    aria_label: "Toggle menu".to_string(),
                    onclick: move |_| on_toggle_menu.call(()),
                    if props.menu_open {
                        Icon { kind: IconKind::X }
                    } else {
                        Icon { kind: IconKind::Menu }
                    }
                }
            }

            if props.menu_open {
                div { class: "mobile-menu",
                    for id in SectionId::ALL {
                        a {
                            key: "{id}",
                            href: "#{id}",
                            class: link_class("mobile-link", props.active, id),
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_close_menu.call(());
                                scroll_to_section(id);
                            },
                            "{id.label()}"
                        }
                    }
                    Button {
                        class: "w-full".to_string(),
                        onclick: move |_| on_join.call(()),
                        "Join Waitlist"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_link_is_highlighted() {
        let active = Some(SectionId::Security);
        assert_eq!(link_class("nav-link", active, SectionId::Security), "nav-link active");
        assert_eq!(link_class("nav-link", active, SectionId::Team), "nav-link");
        assert_eq!(link_class("nav-link", None, SectionId::Problem), "nav-link");
    }
}
