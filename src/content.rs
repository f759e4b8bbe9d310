//! Static page copy.

use crate::components::IconKind;

/// Expanded detail shown when hovering a use-case card.
#[derive(Debug, PartialEq, Eq)]
pub struct CaseDetails {
    pub scenario: &'static str,
    pub risk: &'static str,
    pub approach: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UseCase {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub details: CaseDetails,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConsumerCase {
    pub title: &'static str,
    pub icon: IconKind,
    pub desc: &'static str,
    pub details: CaseDetails,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub icon: IconKind,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub const AGENT_ACTIVITIES: [&str; 6] = [
    "Purchase compute",
    "Manage ad budgets",
    "Execute procurement",
    "Pay vendors",
    "Subscribe to APIs",
    "Coordinate infrastructure",
];

pub const STRUCTURAL_GAPS: [&str; 5] = [
    "Unbounded autonomous spending",
    "Regulatory uncertainty",
    "Lack of machine-readable audit trails",
    "Fraud exposure",
    "Institutional resistance to AI deployment",
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Agent-Level Wallets",
        icon: IconKind::Wallet,
        desc: "Dedicated secure vaults for each autonomous agent with unique cryptographic identities.",
    },
    Feature {
        title: "Budget & Spending Controls",
        icon: IconKind::BarChart,
        desc: "Granular limits on transaction size, frequency, and total budget per agent.",
    },
    Feature {
        title: "Merchant Whitelisting",
        icon: IconKind::Shield,
        desc: "Restrict agent spending to pre-approved vendors and service providers.",
    },
    Feature {
        title: "Real-Time Validation",
        icon: IconKind::CheckCircle,
        desc: "Instant policy enforcement before any transaction is broadcast to the network.",
    },
    Feature {
        title: "Intent-Linked Audit",
        icon: IconKind::Lock,
        desc: "Every payment is cryptographically linked to the agent's reasoning and intent.",
    },
    Feature {
        title: "Governance Layer",
        icon: IconKind::Building,
        desc: "Centralized dashboard for human oversight and enterprise-wide AI financial policy.",
    },
];

pub const ENTERPRISE_CASES: [UseCase; 6] = [
    UseCase {
        num: "01",
        title: "AI Sales & Marketing Governance",
        desc: "Manage autonomous ad spend and lead generation budgets with real-time ROI tracking.",
        details: CaseDetails {
            scenario: "A SaaS enterprise deploys 50 outbound sales agents, 20 ad-buying agents, and 10 enrichment agents purchasing lead databases, ad credits, and SaaS tools.",
            risk: "Finance refuses to attach corporate cards; spend attribution is impossible; fraud detection flags automated transactions.",
            approach: "Dedicated programmable wallets, department-level budget enforcement, and merchant-specific authorization.",
            outcome: "AI-driven sales operations scale safely without compromising financial governance.",
        },
    },
    UseCase {
        num: "02",
        title: "Autonomous Procurement Controls",
        desc: "Enable agents to source and pay for supplies within strict corporate policy bounds.",
        details: CaseDetails {
            scenario: "Procurement AI monitors supplier pricing and executes vendor switching, contract renewals, and cross-border payments.",
            risk: "Bank freezes due to automated patterns, unapproved vendor exposure, and compliance uncertainty.",
            approach: "Vendor whitelisting, country-based risk controls, FX spread management, and policy-based validation.",
            outcome: "Autonomous procurement becomes legally defensible and operationally scalable.",
        },
    },
    UseCase {
        num: "03",
        title: "Cloud & Infrastructure Spend",
        desc: "Dynamic scaling of compute resources with automated settlement and cost optimization.",
        details: CaseDetails {
            scenario: "Engineering agents autonomously scale GPU clusters, purchase cloud credits, and optimize infrastructure costs.",
            risk: "Runaway cloud spending, shadow infrastructure, and lack of per-agent cost tracking.",
            approach: "Compute-only wallet permissions, provider-restricted merchant lists, and monthly caps with automated anomaly detection.",
            outcome: "Infrastructure automation becomes financially predictable.",
        },
    },
    UseCase {
        num: "04",
        title: "Cross-Department AI Budget Isolation",
        desc: "Ensure departmental budgets remain segregated and auditable across the organization.",
        details: CaseDetails {
            scenario: "An enterprise deploys AI across Marketing, Procurement, Engineering, HR, and Finance, each operating autonomous agents.",
            risk: "Budget leakage, no financial isolation, no liability mapping, and inconsistent compliance exposure.",
            approach: "Department-level wallets, agent-level sub-accounts, inherited policy logic, and unified audit dashboard.",
            outcome: "AI mirrors enterprise structure while maintaining financial discipline.",
        },
    },
    UseCase {
        num: "05",
        title: "Agent-to-Agent Settlement",
        desc: "A frictionless framework for autonomous systems to trade resources and services.",
        details: CaseDetails {
            scenario: "AI agents begin purchasing services (data, testing, analytics) from other AI agents autonomously.",
            risk: "No machine-native settlement rail, no identity-bound wallets, and no microtransaction clearing.",
            approach: "Identity-linked agent wallets, policy-controlled microtransactions, and A2A settlement network.",
            outcome: "The foundation for machine-to-machine commerce.",
        },
    },
    UseCase {
        num: "06",
        title: "Regulatory-Ready Audit Infrastructure",
        desc: "Instant reporting and compliance trails for internal and external regulatory bodies.",
        details: CaseDetails {
            scenario: "Regulators require accountability and logic for automated payments executed by AI systems.",
            risk: "Lack of traceability, no defensible transaction rationale, and compliance exposure.",
            approach: "Agent identity binding, policy rule traceability, and immutable audit hashes via Naoris/Polygon anchoring.",
            outcome: "AI becomes auditable by design rather than by exception.",
        },
    },
];

pub const CONSUMER_CASES: [ConsumerCase; 4] = [
    ConsumerCase {
        title: "Personal Assistant Wallet",
        icon: IconKind::User,
        desc: "Dedicated safe sandbox for autonomous personal assistants.",
        details: CaseDetails {
            scenario: "Manage subscriptions, book travel, refill prescriptions, optimize recurring bills, and purchase digital services.",
            risk: "Main bank card exposed to autonomous activity; no merchant restrictions or spending segmentation.",
            approach: "Dedicated AI wallet/virtual card, merchant whitelisting, task-based caps, and intent-linked records.",
            outcome: "Safe financial sandbox without risking primary accounts.",
        },
    },
    ConsumerCase {
        title: "Subscription Optimization",
        icon: IconKind::Zap,
        desc: "AI-driven cost management and automated SaaS auditing.",
        details: CaseDetails {
            scenario: "AI agent audits recurring subscriptions, cancels unused services, downgrades tiers, and switches vendors.",
            risk: "Uncontrolled recurring spend; difficult cancellation patterns; lack of payment transparency.",
            approach: "Temporary-use virtual cards, subscription-specific rules, and auto-expiring payment permissions.",
            outcome: "Financial automation becomes controlled and transparent.",
        },
    },
    ConsumerCase {
        title: "Spending Limits",
        icon: IconKind::Shield,
        desc: "Hard caps and granular controls on autonomous spend.",
        details: CaseDetails {
            scenario: "Set a strict $200 monthly limit for a grocery agent and a $20 per-transaction cap for a news agent.",
            risk: "Rogue agents causing financial damage; accidental double-billing; unapproved premium upgrades.",
            approach: "Hard-coded per-transaction and per-period caps with real-time policy enforcement.",
            outcome: "Guaranteed financial safety with zero-overspend certainty.",
        },
    },
    ConsumerCase {
        title: "Investment & Trading Agent",
        icon: IconKind::BarChart,
        desc: "Risk-contained autonomous portfolio management.",
        details: CaseDetails {
            scenario: "Crypto portfolio management, automated equity strategies, and yield optimization.",
            risk: "Runaway trading; excess leverage exposure; exchange freezes due to bot activity.",
            approach: "Segregated capital pool, drawdown limits, leverage caps, and immutable logic anchoring for every trade.",
            outcome: "Autonomous investing becomes governed and risk-contained.",
        },
    },
];

pub const SECURITY_PILLARS: [Pillar; 4] = [
    Pillar {
        title: "Tamper-Resistant Anchoring",
        desc: "Transaction logs are anchored to a decentralized ledger for immutable audit trails.",
    },
    Pillar {
        title: "Decentralized Validation",
        desc: "Multi-node verification ensures no single point of failure in transaction approval.",
    },
    Pillar {
        title: "Identity Verification Layer",
        desc: "Post-quantum secure identity for both agents and their human overseers.",
    },
    Pillar {
        title: "Sub-Zero Infrastructure",
        desc: "Security logic that sits beneath the financial layer, protecting the core protocol.",
    },
];

pub const PARTNERSHIP_AREAS: [&str; 4] = [
    "Infrastructure deployment",
    "Enterprise introductions",
    "Capital readiness",
    "Protocol-level integration",
];

pub const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Patrick",
        role: "Founder & Tech Lead",
        bio: "Focus on design and developing product and long term strategy. Leading the technical vision and architecture of AigenticPay.",
        image: "/patrick.png",
    },
    TeamMember {
        name: "Scott",
        role: "Co-Founder",
        bio: "Responsible for marketing, sales and company operation. Driving ecosystem growth and strategic partnerships.",
        image: "/scott.png",
    },
];
