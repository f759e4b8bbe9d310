//! Viewport watching for the landing page.
//!
//! Installs the webview's native intersection observer over the tracked
//! sections, configured with the trigger band's root margin, and streams
//! its notifications back to Rust. The same script reports the scroll
//! offset for the back-to-top control.
//!
//! One watcher exists per page: it is installed when the App mounts and
//! disconnected when it unmounts. Reinstalling replaces any previous one.

use dioxus::prelude::*;
use serde::Deserialize;

use aigenticpay_core::{
    IntersectionEntry, PageState, SectionId, TriggerBand, BACK_TO_TOP_THRESHOLD,
};

const WATCHER_SCRIPT: &str = r#"
const ids = __SECTION_IDS__;
const rootMargin = "__ROOT_MARGIN__";

function teardown() {
  const previous = window.__aigenticpayWatcher;
  if (previous) {
    previous.observer.disconnect();
    window.removeEventListener("scroll", previous.onScroll);
    delete window.__aigenticpayWatcher;
  }
}

function install() {
  teardown();

  const observer = new IntersectionObserver((entries) => {
    dioxus.send({
      kind: "intersections",
      entries: entries.map((e) => ({ id: e.target.id, intersecting: e.isIntersecting })),
    });
  }, { root: null, rootMargin, threshold: 0 });

  const observed = [];
  const missing = [];
  ids.forEach((id) => {
    const el = document.getElementById(id);
    if (el) {
      observer.observe(el);
      observed.push(id);
    } else {
      missing.push(id);
    }
  });

  let pending = false;
  const onScroll = () => {
    if (pending) return;
    pending = true;
    requestAnimationFrame(() => {
      pending = false;
      dioxus.send({ kind: "scroll", y: window.scrollY });
    });
  };
  window.addEventListener("scroll", onScroll, { passive: true });

  window.__aigenticpayWatcher = { observer, onScroll };
  dioxus.send({ kind: "installed", observed, missing });
}

if (document.readyState === "loading") {
  document.addEventListener("DOMContentLoaded", install);
} else {
  install();
}
"#;

const TEARDOWN_SCRIPT: &str = r#"
const previous = window.__aigenticpayWatcher;
if (previous) {
  previous.observer.disconnect();
  window.removeEventListener("scroll", previous.onScroll);
  delete window.__aigenticpayWatcher;
}
"#;

/// Messages sent by the watcher script
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum WatcherMessage {
    Installed {
        observed: Vec<String>,
        missing: Vec<String>,
    },
    Intersections {
        entries: Vec<RawEntry>,
    },
    Scroll {
        y: f64,
    },
}

#[derive(Debug, Deserialize, PartialEq)]
struct RawEntry {
    id: String,
    intersecting: bool,
}

fn watcher_script(band: &TriggerBand, sections: &[SectionId]) -> String {
    let ids = sections
        .iter()
        .map(|s| format!("\"{}\"", s.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    WATCHER_SCRIPT
        .replace("__SECTION_IDS__", &format!("[{}]", ids))
        .replace("__ROOT_MARGIN__", &band.root_margin())
}

/// Convert observer entries, dropping ids outside the tracked set.
fn parse_entries(raw: Vec<RawEntry>) -> Vec<IntersectionEntry> {
    raw.into_iter()
        .filter_map(|entry| match entry.id.parse::<SectionId>() {
            Ok(id) => Some(IntersectionEntry {
                id,
                is_intersecting: entry.intersecting,
            }),
            Err(e) => {
                tracing::debug!("Ignoring observer entry: {}", e);
                None
            }
        })
        .collect()
}

fn apply_message(page: &mut Signal<PageState>, message: WatcherMessage) {
    match message {
        WatcherMessage::Installed { observed, missing } => {
            tracing::info!("Section watcher installed over {} regions", observed.len());
            for id in missing {
                tracing::debug!(section = %id, "Section not rendered, not watched");
            }
        }
        WatcherMessage::Intersections { entries } => {
            // Only touch the signal when the highlight actually moves
            let mut tracker = page.peek().tracker;
            if tracker.apply(parse_entries(entries)) {
                tracing::debug!(active = ?tracker.active(), "Active section changed");
                page.write().tracker = tracker;
            }
        }
        WatcherMessage::Scroll { y } => {
            let show = y > BACK_TO_TOP_THRESHOLD;
            if page.peek().show_back_to_top != show {
                page.write().set_scroll_offset(y);
            }
        }
    }
}

/// Install the section watcher for the lifetime of the calling component.
pub fn use_viewport_watcher(page: Signal<PageState>) {
    use_effect(move || {
        let script = watcher_script(&TriggerBand::default(), &SectionId::ALL);
        let mut page = page;
        spawn(async move {
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<WatcherMessage>().await {
                    Ok(message) => apply_message(&mut page, message),
                    Err(e) => {
                        tracing::warn!("Section watcher stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(|| {
        tracing::debug!("Disconnecting section watcher");
        let _ = document::eval(TEARDOWN_SCRIPT);
    });
}

/// Smoothly scroll a section into view.
pub fn scroll_to_section(id: SectionId) {
    let _ = document::eval(&format!(
        r#"document.getElementById("{}")?.scrollIntoView({{ behavior: "smooth" }});"#,
        id.as_str()
    ));
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    let _ = document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
}
