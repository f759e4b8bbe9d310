//! Global CSS styles for the AigenticPay landing page.
//!
//! Light slate surfaces, ink-dark feature sections, emerald accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --surface-tint: #f8fafc;
  --surface-border: #e2e8f0;

  --ink: #0f172a;
  --ink-soft: #475569;
  --ink-muted: #64748b;

  --emerald: #10b981;
  --emerald-deep: #059669;
  --emerald-wash: #ecfdf5;

  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  --nav-height: 80px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  color: var(--ink);
  background: var(--surface);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

img {
  display: block;
  max-width: 100%;
}

::selection {
  background: var(--emerald-wash);
  color: var(--emerald-deep);
}

/* === Utilities === */
.w-full { width: 100%; }
.centered { text-align: center; }
.accent { color: var(--emerald); }
.danger { color: var(--danger); }
.muted { color: var(--ink-muted); font-size: var(--text-sm); }
.light { color: var(--surface); }

.icon { width: 24px; height: 24px; flex-shrink: 0; }
.icon-sm { width: 18px; height: 18px; flex-shrink: 0; }
.icon-lg { width: 40px; height: 40px; flex-shrink: 0; }

/* === Buttons === */
.btn-primary,
.btn-outline {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 9999px;
  font-family: inherit;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast), transform var(--transition-fast);
}

.btn-primary {
  background: var(--ink);
  color: var(--surface);
  border: 1px solid var(--ink);
}

.btn-primary:hover:not(:disabled) {
  background: var(--emerald-deep);
  border-color: var(--emerald-deep);
}

.btn-outline {
  background: transparent;
  color: var(--ink);
  border: 2px solid var(--ink);
}

.btn-outline:hover:not(:disabled) {
  background: var(--ink);
  color: var(--surface);
}

.btn-primary:disabled,
.btn-outline:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-small { padding: 0.5rem 1.25rem; }
.btn-large { padding: 1rem 2.5rem; font-size: var(--text-lg); }
.btn-tall { min-height: 3.5rem; }

.btn-inverted {
  background: var(--surface);
  color: var(--emerald-deep);
  border-color: var(--surface);
}

.btn-inverted:hover:not(:disabled) {
  background: var(--ink);
  color: var(--surface);
  border-color: var(--ink);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  background: transparent;
  border: none;
  border-radius: 9999px;
  color: var(--ink-soft);
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.icon-btn:hover {
  background: var(--surface-tint);
  color: var(--ink);
}

.close-btn {
  position: absolute;
  top: 1.25rem;
  right: 1.25rem;
  font-size: 1.5rem;
  line-height: 1;
}

.spinner {
  width: 22px;
  height: 22px;
  border: 2px solid rgba(255, 255, 255, 0.35);
  border-top-color: var(--surface);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Navigation === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--surface-border);
}

.nav-inner {
  max-width: 1280px;
  height: var(--nav-height);
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: none;
  border: none;
  cursor: pointer;
  font-family: inherit;
}

.logo-mark {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  border-radius: 8px;
  background: var(--ink);
  color: var(--surface);
}

.logo-mark.inverted {
  background: var(--surface);
  color: var(--ink);
}

.logo-text {
  font-size: var(--text-lg);
  font-weight: 800;
  letter-spacing: -0.02em;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 2rem;
}

.nav-link {
  position: relative;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-soft);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--ink);
}

.nav-link.active {
  color: var(--emerald-deep);
  font-weight: 700;
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -4px;
  height: 2px;
  border-radius: 1px;
  background: var(--emerald);
}

.nav-menu-toggle {
  display: none;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  background: var(--surface);
  border-bottom: 1px solid var(--surface-border);
}

.mobile-link {
  font-weight: 500;
  color: var(--ink-soft);
}

.mobile-link.active {
  color: var(--emerald-deep);
  font-weight: 700;
}

/* === Layout === */
.landing {
  padding-top: var(--nav-height);
}

.page-section {
  padding: 6rem 0;
  scroll-margin-top: var(--nav-height);
}

.page-section.tinted { background: var(--surface-tint); }
.page-section.dark { background: var(--ink); color: var(--surface); }
.page-section.cta { background: var(--emerald-deep); color: var(--surface); }

.section-container {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section-container.narrow { max-width: 960px; }

.two-col {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 4rem;
  align-items: center;
}

.section-heading {
  margin-bottom: 3rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 800;
  line-height: 1.15;
  letter-spacing: -0.02em;
  color: var(--ink);
  margin-bottom: 1rem;
}

.section-subtitle {
  font-size: var(--text-lg);
  color: var(--ink-soft);
  max-width: 42rem;
}

.centered .section-subtitle { margin: 0 auto; }

.section-heading.light .section-title,
.section-title.light { color: var(--surface); }

.section-heading.light .section-subtitle,
.section-subtitle.light { color: rgba(255, 255, 255, 0.7); }

.section-note {
  margin-top: 3rem;
  text-align: center;
  font-weight: 600;
  color: var(--ink-soft);
}

.section-note.light { color: rgba(255, 255, 255, 0.55); font-weight: 400; }

.eyebrow {
  display: inline-block;
  margin-bottom: 1rem;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--emerald);
}

.body-text {
  color: var(--ink-soft);
  margin-bottom: 2rem;
}

/* === Hero === */
.hero {
  position: relative;
  overflow: hidden;
  padding: 8rem 0 6rem;
}

.hero-glow {
  position: absolute;
  top: -10rem;
  left: 50%;
  width: 60rem;
  height: 40rem;
  transform: translateX(-50%);
  background: radial-gradient(circle, var(--emerald-wash) 0%, transparent 70%);
  pointer-events: none;
}

.hero .section-container { position: relative; }

.hero-badge {
  display: inline-block;
  padding: 0.35rem 1rem;
  margin-bottom: 2rem;
  border-radius: 9999px;
  background: var(--emerald-wash);
  color: var(--emerald-deep);
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.05;
  letter-spacing: -0.03em;
  max-width: 56rem;
  margin: 0 auto 1.5rem;
}

.hero-lead {
  font-size: var(--text-xl);
  color: var(--ink-soft);
  max-width: 42rem;
  margin: 0 auto 2.5rem;
}

/* === Problem === */
.check-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.check-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-weight: 500;
}

.gap-card {
  padding: 2.5rem;
  border-radius: 1.5rem;
  background: var(--surface-tint);
  border: 1px solid var(--surface-border);
}

.gap-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
  font-size: var(--text-xl);
}

.gap-list {
  margin: 1.5rem 0;
}

.gap-list li {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 0;
  color: var(--ink-soft);
}

.gap-footer {
  padding-top: 1.5rem;
  border-top: 1px solid var(--surface-border);
  font-weight: 700;
  color: var(--emerald-deep);
}

/* === Solution === */
.feature-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
}

.feature-card {
  padding: 2rem;
  border-radius: 1rem;
  background: var(--surface);
  border: 1px solid var(--surface-border);
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.feature-card:hover {
  box-shadow: 0 20px 40px -20px rgba(15, 23, 42, 0.2);
  transform: translateY(-2px);
}

.feature-card h4 { margin: 1rem 0 0.5rem; }

.feature-icon {
  display: inline-flex;
  padding: 0.75rem;
  border-radius: 0.75rem;
  background: var(--emerald-wash);
  color: var(--emerald-deep);
}

/* === Use Case Cards === */
.case-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  margin-top: 4rem;
}

.consumer-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.detail-card {
  position: relative;
  padding: 2rem;
  border-radius: 1rem;
  cursor: help;
  transition: border-color var(--transition-normal), background var(--transition-normal);
}

.dark .detail-card {
  border: 1px solid rgba(255, 255, 255, 0.1);
  background: rgba(255, 255, 255, 0.04);
}

.dark .detail-card:hover { border-color: rgba(16, 185, 129, 0.5); }

.consumer-grid .detail-card {
  padding: 1.5rem;
  border: 1px solid var(--surface-border);
  background: var(--surface);
}

.consumer-grid .detail-card:hover { border-color: var(--emerald); }

.case-summary {
  display: flex;
  gap: 1.5rem;
}

.case-num {
  font-size: var(--text-2xl);
  font-weight: 800;
  color: rgba(16, 185, 129, 0.4);
}

.case-summary h4 { margin-bottom: 0.5rem; }
.dark .case-summary .muted { color: rgba(255, 255, 255, 0.55); }

.consumer-summary h5 { margin: 0.75rem 0 0.25rem; font-size: var(--text-base); }

.detail-popup {
  position: absolute;
  left: 0;
  right: 0;
  z-index: 40;
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
  transition: opacity var(--transition-normal), transform var(--transition-normal),
    visibility var(--transition-normal);
}

.detail-popup.below { top: 100%; margin-top: 1rem; transform: translateY(-8px); }
.detail-popup.above { bottom: 100%; margin-bottom: 1rem; transform: translateY(8px); }

.detail-popup.visible {
  opacity: 1;
  visibility: visible;
  pointer-events: auto;
  transform: translateY(0);
}

.detail-popup-inner {
  padding: 1.5rem;
  border-radius: 1rem;
  background: var(--surface);
  color: var(--ink);
  border: 1px solid var(--surface-border);
  box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.35);
  font-size: var(--text-sm);
}

.detail-badge {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1rem;
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--emerald-deep);
}

.detail-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--emerald);
  flex-shrink: 0;
}

.detail-block { margin-bottom: 0.75rem; }

.detail-block h5 {
  font-size: var(--text-xs);
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--ink-muted);
  margin-bottom: 0.25rem;
}

.detail-block.highlight {
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: var(--emerald-wash);
}

.detail-block.highlight h5 { color: var(--emerald-deep); }

.detail-outcome {
  padding-top: 0.75rem;
  border-top: 1px solid var(--surface-border);
  font-weight: 600;
}

/* === Security === */
.security-badge {
  display: inline-flex;
  padding: 1rem;
  margin-bottom: 2rem;
  border-radius: 1rem;
  background: var(--ink);
  color: var(--emerald);
}

.pillar-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  text-align: left;
}

.pillar-card {
  padding: 1.5rem;
  border-radius: 1rem;
  background: var(--surface);
  border: 1px solid var(--surface-border);
}

.pillar-card h5 {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  font-size: var(--text-base);
}

/* === Partnership === */
.partner-card {
  padding: 4rem;
  border-radius: 2rem;
  background: linear-gradient(135deg, var(--ink) 0%, #064e3b 100%);
  color: var(--surface);
}

.partner-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  margin-top: 2.5rem;
}

.partner-item {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-weight: 500;
}

/* === Team === */
.team-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 3rem;
  max-width: 56rem;
  margin: 0 auto;
}

.team-card { text-align: center; }

.team-photo {
  width: 160px;
  height: 160px;
  margin: 0 auto 1.5rem;
  border-radius: 50%;
  overflow: hidden;
  background: var(--surface-tint);
  border: 4px solid var(--emerald-wash);
}

.team-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.team-role {
  margin-bottom: 0.75rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--emerald-deep);
}

.venture-card {
  display: flex;
  gap: 1.5rem;
  align-items: flex-start;
  max-width: 56rem;
  margin: 4rem auto 0;
  padding: 2rem;
  border-radius: 1rem;
  background: var(--surface-tint);
  border: 1px solid var(--surface-border);
}

.venture-icon {
  display: inline-flex;
  padding: 1rem;
  border-radius: 1rem;
  background: var(--ink);
  color: var(--emerald);
}

/* === Footer === */
.site-footer {
  padding: 5rem 0 2.5rem;
  background: var(--ink);
  color: rgba(255, 255, 255, 0.7);
}

.footer-inner {
  max-width: 1280px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 3rem;
  margin-bottom: 4rem;
}

.footer-logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
  color: var(--surface);
}

.footer-blurb {
  max-width: 24rem;
  font-size: var(--text-sm);
}

.footer-heading {
  margin-bottom: 1.25rem;
  font-size: var(--text-sm);
  color: var(--surface);
}

.footer-links li {
  margin-bottom: 0.75rem;
  font-size: var(--text-sm);
}

.footer-links a:hover { color: var(--emerald); }

.footer-bottom {
  display: flex;
  justify-content: space-between;
  padding-top: 2rem;
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  font-size: var(--text-xs);
}

/* === Back To Top === */
.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  z-index: 45;
  display: inline-flex;
  padding: 0.875rem;
  border: none;
  border-radius: 50%;
  background: var(--ink);
  color: var(--surface);
  cursor: pointer;
  box-shadow: 0 10px 25px -5px rgba(15, 23, 42, 0.4);
  animation: fade-in var(--transition-normal);
  transition: background var(--transition-fast);
}

.back-to-top:hover { background: var(--emerald-deep); }

@keyframes fade-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Waitlist Modal === */
.modal-root {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.modal-overlay {
  position: absolute;
  inset: 0;
  background: rgba(15, 23, 42, 0.6);
  backdrop-filter: blur(4px);
  animation: fade-in var(--transition-normal);
}

.waitlist-modal {
  position: relative;
  width: 100%;
  max-width: 32rem;
  padding: 2.5rem;
  border-radius: 1.5rem;
  background: var(--surface);
  box-shadow: 0 25px 50px -12px rgba(15, 23, 42, 0.5);
  animation: fade-in var(--transition-normal);
}

.modal-title {
  margin-bottom: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 800;
}

.modal-description {
  margin-bottom: 2rem;
  color: var(--ink-soft);
}

.waitlist-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: var(--text-xs);
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.input-field {
  width: 100%;
  padding: 0.875rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--surface-border);
  background: var(--surface-tint);
  font-family: inherit;
  font-size: var(--text-base);
  color: var(--ink);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--emerald);
  box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.2);
}

.input-field:disabled { opacity: 0.6; }

.input-error {
  font-size: var(--text-sm);
  color: var(--danger);
}

.fine-print {
  text-align: center;
  font-size: var(--text-xs);
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.waitlist-success { text-align: center; }

.success-badge {
  display: inline-flex;
  padding: 1rem;
  margin-bottom: 1.5rem;
  border-radius: 50%;
  background: var(--emerald-wash);
  color: var(--emerald-deep);
}

/* === Responsive === */
@media (max-width: 900px) {
  .nav-links { display: none; }
  .nav-menu-toggle { display: inline-flex; }
  .mobile-menu { display: flex; }

  .two-col,
  .feature-grid,
  .case-grid,
  .consumer-grid,
  .pillar-grid,
  .partner-grid,
  .team-grid,
  .footer-grid {
    grid-template-columns: 1fr;
  }

  .hero-title { font-size: var(--text-2xl); }
  .partner-card { padding: 2rem; }
  .footer-bottom { flex-direction: column; gap: 0.5rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use aigenticpay_ui::ButtonVariant;

    #[test]
    fn every_button_variant_is_styled() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Outline] {
            let rule = format!(".{} {{", variant.class());
            assert!(GLOBAL_STYLES.contains(&rule), "missing rule {}", rule);
        }
        assert!(!GLOBAL_STYLES.contains("btn-ghost"));
    }
}
