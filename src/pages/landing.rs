//! Landing page - the single AigenticPay marketing page.
//!
//! Tracked sections carry the element ids in [`SectionId`]; the
//! partnership block and call-to-action are deliberately untracked.

use dioxus::prelude::*;

use aigenticpay_core::SectionId;
use aigenticpay_ui::{Button, ButtonVariant};

use crate::components::{DetailCard, Icon, IconKind, PopupPlacement, SectionHeading};
use crate::content::{
    AGENT_ACTIVITIES, CONSUMER_CASES, ENTERPRISE_CASES, FEATURES, PARTNERSHIP_AREAS,
    SECURITY_PILLARS, STRUCTURAL_GAPS, TEAM,
};

/// Index of the first enterprise card whose popup opens upwards
const ENTERPRISE_FIRST_ABOVE: usize = 4;
/// Index of the first consumer card whose popup opens upwards
const CONSUMER_FIRST_ABOVE: usize = 2;

/// Landing page component.
#[component]
pub fn Landing(on_join: EventHandler<()>) -> Element {
    rsx! {
        main { class: "landing",
            Hero { on_join }
            ProblemSection {}
            SolutionSection {}
            EnterpriseSection {}
            IndividualsSection { on_join }
            SecuritySection {}
            PartnershipSection {}
            TeamSection {}
            CallToAction { on_join }
        }
    }
}

#[component]
fn Hero(on_join: EventHandler<()>) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-glow" }
            div { class: "section-container centered",
                span { class: "hero-badge", "Now in Private Beta" }
                h1 { class: "hero-title",
                    "The Financial Governance Layer for "
                    span { class: "accent", "Autonomous AI" }
                }
                p { class: "hero-lead",
                    "AigenticPay enables AI agents to transact safely, compliantly, and autonomously, with programmable controls and enterprise-grade auditability."
                }
                Button {
                    class: "btn-large".to_string(),
                    onclick: move |_| on_join.call(()),
                    "Join Waitlist"
                    Icon { kind: IconKind::ArrowRight, class: "icon-sm".to_string() }
                }
            }
        }
    }
}

#[component]
fn ProblemSection() -> Element {
    rsx! {
        section { id: SectionId::Problem.as_str(), class: "page-section",
            div { class: "section-container two-col",
                div {
                    SectionHeading {
                        title: "AI Agents Are Beginning to Control Budgets".to_string(),
                        subtitle: "Artificial intelligence is rapidly evolving from decision-support tools into autonomous actors.".to_string(),
                    }
                    p { class: "body-text",
                        "AI agents are beginning to purchase compute, manage ad budgets, execute procurement, pay vendors, subscribe to APIs, and coordinate infrastructure."
                    }
                    div { class: "check-grid",
                        for item in AGENT_ACTIVITIES {
                            div { key: "{item}", class: "check-item",
                                Icon { kind: IconKind::CheckCircle, class: "icon-sm accent".to_string() }
                                span { "{item}" }
                            }
                        }
                    }
                }

                div { class: "gap-card",
                    h3 { class: "gap-title",
                        Icon { kind: IconKind::Zap, class: "icon-sm".to_string() }
                        "The Structural Gap"
                    }
                    p { class: "muted",
                        "Financial systems were designed for humans. Without new infrastructure, enterprises face:"
                    }
                    ul { class: "gap-list",
                        for item in STRUCTURAL_GAPS {
                            li { key: "{item}",
                                Icon { kind: IconKind::X, class: "icon-sm danger".to_string() }
                                span { "{item}" }
                            }
                        }
                    }
                    p { class: "gap-footer", "AigenticPay solves this structural gap." }
                }
            }
        }
    }
}

#[component]
fn SolutionSection() -> Element {
    rsx! {
        section { id: SectionId::Solution.as_str(), class: "page-section tinted",
            div { class: "section-container",
                SectionHeading {
                    title: "Programmable Financial Infrastructure for AI Agents".to_string(),
                    subtitle: "AigenticPay provides a policy-enforced, identity-bound payment layer designed specifically for AI systems.".to_string(),
                }
                div { class: "feature-grid",
                    for feature in FEATURES.iter() {
                        div { key: "{feature.title}", class: "feature-card",
                            div { class: "feature-icon",
                                Icon { kind: feature.icon }
                            }
                            h4 { "{feature.title}" }
                            p { class: "muted", "{feature.desc}" }
                        }
                    }
                }
                p { class: "section-note", "Deploy AI autonomy without sacrificing financial discipline." }
            }
        }
    }
}

#[component]
fn EnterpriseSection() -> Element {
    rsx! {
        section { id: SectionId::Enterprise.as_str(), class: "page-section dark",
            div { class: "section-container",
                div { class: "centered",
                    span { class: "eyebrow", "Enterprise-First" }
                    h2 { class: "section-title light", "Built for Enterprise AI Workforces" }
                    p { class: "section-subtitle light",
                        "Scalable governance for the next generation of corporate infrastructure."
                    }
                }
                div { class: "case-grid",
                    for (i, case) in ENTERPRISE_CASES.iter().enumerate() {
                        DetailCard {
                            key: "{case.num}",
                            badge: "Detailed Use Case",
                            approach_label: "AigenticPay Implementation",
                            details: &case.details,
                            placement: PopupPlacement::for_index(i, ENTERPRISE_FIRST_ABOVE),
                            div { class: "case-summary",
                                span { class: "case-num", "{case.num}" }
                                div {
                                    h4 { "{case.title}" }
                                    p { class: "muted", "{case.desc}" }
                                }
                            }
                        }
                    }
                }
                p { class: "section-note light",
                    "Hover over any use case title to explore detailed implementation scenarios."
                }
            }
        }
    }
}

#[component]
fn IndividualsSection(on_join: EventHandler<()>) -> Element {
    rsx! {
        section { id: SectionId::Individuals.as_str(), class: "page-section",
            div { class: "section-container two-col",
                div { class: "consumer-grid",
                    for (i, case) in CONSUMER_CASES.iter().enumerate() {
                        DetailCard {
                            key: "{case.title}",
                            badge: "Individual Use Case",
                            approach_label: "AigenticPay Solution",
                            details: &case.details,
                            placement: PopupPlacement::for_index(i, CONSUMER_FIRST_ABOVE),
                            div { class: "consumer-summary",
                                Icon { kind: case.icon, class: "icon accent".to_string() }
                                h5 { "{case.title}" }
                                p { class: "muted", "{case.desc}" }
                            }
                        }
                    }
                }

                div {
                    SectionHeading {
                        title: "Safe AI Wallets for Individuals".to_string(),
                        subtitle: "Consumers can deploy AI assistants safely using our consumer-grade wallet infrastructure.".to_string(),
                    }
                    p { class: "body-text",
                        "While our core is enterprise, we believe the machine economy starts with individuals. Our consumer layer validates early adoption and builds ecosystem scale, enabling personal AI agents to manage budgets with the same rigor as corporate workforces."
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_join.call(()),
                        "Join Waitlist"
                    }
                }
            }
        }
    }
}

#[component]
fn SecuritySection() -> Element {
    rsx! {
        section { id: SectionId::Security.as_str(), class: "page-section tinted",
            div { class: "section-container narrow centered",
                div { class: "security-badge",
                    Icon { kind: IconKind::Lock, class: "icon-lg".to_string() }
                }
                SectionHeading {
                    title: "Secured by Naoris Protocol".to_string(),
                    subtitle: "AigenticPay integrates decentralized verification and post-quantum security infrastructure via Naoris Protocol.".to_string(),
                }
                div { class: "pillar-grid",
                    for pillar in SECURITY_PILLARS.iter() {
                        div { key: "{pillar.title}", class: "pillar-card",
                            h5 {
                                Icon { kind: IconKind::CheckCircle, class: "icon-sm accent".to_string() }
                                "{pillar.title}"
                            }
                            p { class: "muted", "{pillar.desc}" }
                        }
                    }
                }
                p { class: "section-note", "This differentiates AigenticPay from traditional fintech providers." }
            }
        }
    }
}

#[component]
fn PartnershipSection() -> Element {
    rsx! {
        section { class: "page-section",
            div { class: "section-container",
                div { class: "partner-card",
                    span { class: "eyebrow", "Strategic Investment & Ecosystem Alignment" }
                    h2 { class: "section-title light", "Strategic Partnership with Naoris Ventures" }
                    p { class: "section-subtitle light",
                        "AigenticPay is supported by Naoris Ventures through strategic narrative development, capital formation support, and institutional positioning."
                    }
                    div { class: "partner-grid",
                        for area in PARTNERSHIP_AREAS {
                            div { key: "{area}", class: "partner-item",
                                span { class: "detail-dot" }
                                span { "{area}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamSection() -> Element {
    rsx! {
        section { id: SectionId::Team.as_str(), class: "page-section",
            div { class: "section-container",
                SectionHeading {
                    title: "The Team Behind AigenticPay".to_string(),
                    subtitle: "Led by infrastructure veterans and supported by world-class venture partners.".to_string(),
                }
                div { class: "team-grid",
                    for member in TEAM.iter() {
                        div { key: "{member.name}", class: "team-card",
                            div { class: "team-photo",
                                img {
                                    src: "{member.image}",
                                    alt: "{member.name} - {member.role}",
                                    referrerpolicy: "no-referrer",
                                }
                            }
                            h4 { "{member.name}" }
                            p { class: "team-role", "{member.role}" }
                            p { class: "muted", "{member.bio}" }
                        }
                    }
                }
                div { class: "venture-card",
                    div { class: "venture-icon",
                        Icon { kind: IconKind::Globe }
                    }
                    div {
                        h4 { "Naoris Ventures" }
                        p { class: "team-role", "Strategic Venture Partner" }
                        p { class: "muted",
                            "Providing strategic narrative development, institutional positioning, and technical coordination with Naoris Protocol."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CallToAction(on_join: EventHandler<()>) -> Element {
    rsx! {
        section { class: "page-section cta",
            div { class: "section-container centered",
                h2 { class: "section-title light", "Ready to deploy AI autonomy?" }
                p { class: "section-subtitle light",
                    "Join the leading enterprises building the future of the machine economy with AigenticPay."
                }
                Button {
                    class: "btn-large btn-inverted".to_string(),
                    onclick: move |_| on_join.call(()),
                    "Join Waitlist"
                }
            }
        }
    }
}
