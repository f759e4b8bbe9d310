//! Color constants for the AigenticPay palette.
//!
//! Light slate surfaces with an emerald accent. Keep in sync with the
//! custom properties at the top of [`super::GLOBAL_STYLES`].

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_TINT: &str = "#f8fafc";
pub const SURFACE_BORDER: &str = "#e2e8f0";

// === INK (Text, Dark Sections) ===
pub const INK: &str = "#0f172a";
pub const INK_SOFT: &str = "#475569";
pub const INK_MUTED: &str = "#64748b";

// === EMERALD (Accent, Active Link, Success) ===
pub const EMERALD: &str = "#10b981";
pub const EMERALD_DEEP: &str = "#059669";
pub const EMERALD_WASH: &str = "#ecfdf5";

// === SEMANTIC ===
pub const DANGER: &str = "#ef4444";

/// Every custom property the stylesheet declares, in declaration order.
pub const PALETTE: [(&str, &str); 10] = [
    ("--surface", SURFACE),
    ("--surface-tint", SURFACE_TINT),
    ("--surface-border", SURFACE_BORDER),
    ("--ink", INK),
    ("--ink-soft", INK_SOFT),
    ("--ink-muted", INK_MUTED),
    ("--emerald", EMERALD),
    ("--emerald-deep", EMERALD_DEEP),
    ("--emerald-wash", EMERALD_WASH),
    ("--danger", DANGER),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_declares_palette() {
        for (name, value) in PALETTE {
            let decl = format!("{}: {};", name, value);
            assert!(
                super::super::GLOBAL_STYLES.contains(&decl),
                "missing {}",
                decl
            );
        }
    }
}
