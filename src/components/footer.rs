//! Page footer with section shortcuts.

use dioxus::prelude::*;

use aigenticpay_core::SectionId;

use crate::components::viewport::scroll_to_section;
use crate::components::{Icon, IconKind};

const PLATFORM_LINKS: [(&str, SectionId); 4] = [
    ("Agent Wallets", SectionId::Solution),
    ("Governance Layer", SectionId::Solution),
    ("Security Protocol", SectionId::Security),
    ("Enterprise API", SectionId::Enterprise),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        div { class: "footer-logo",
                            span { class: "logo-mark inverted",
                                Icon { kind: IconKind::Shield, class: "icon-sm".to_string() }
                            }
                            span { class: "logo-text", "AigenticPay" }
                        }
                        p { class: "footer-blurb",
                            "The Financial Governance Layer for Autonomous AI. Enabling safe, compliant, and autonomous transactions for the machine economy."
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Platform" }
                        ul { class: "footer-links",
                            for (label, target) in PLATFORM_LINKS {
                                li { key: "{label}",
                                    a {
                                        href: "#{target}",
                                        onclick: move |evt: MouseEvent| {
                                            evt.prevent_default();
                                            scroll_to_section(target);
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Company" }
                        ul { class: "footer-links",
                            li {
                                a {
                                    href: "#team",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        scroll_to_section(SectionId::Team);
                                    },
                                    "About Us"
                                }
                            }
                            li { span { "Partnerships" } }
                            li { span { "Contact" } }
                            li { span { "Privacy Policy" } }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© 2026 AigenticPay. All rights reserved." }
                    p { "Secured by Naoris Protocol" }
                }
            }
        }
    }
}
