//! Active-section tracking tests
//!
//! Exercises the tracker against the polling watcher over a synthetic
//! page layout, plus property tests for ordering and band semantics.

use aigenticpay_core::{
    IntersectionEntry, PageState, RegionExtent, ScrollWatcher, SectionId, SectionTracker,
    TriggerBand,
};
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

const VIEWPORT: f64 = 1000.0;

/// Hero of 900px, then every section stacked at 1200px each
fn layout(id: SectionId) -> Option<RegionExtent> {
    let index = SectionId::ALL.iter().position(|s| *s == id)?;
    Some(RegionExtent::new(900.0 + index as f64 * 1200.0, 1200.0))
}

fn install() -> ScrollWatcher {
    ScrollWatcher::install(TriggerBand::default(), &SectionId::ALL, layout)
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_sequential_entries_last_wins() {
    let mut tracker = SectionTracker::new();
    tracker.apply([IntersectionEntry::entered(SectionId::Enterprise)]);
    tracker.apply([IntersectionEntry::entered(SectionId::Team)]);
    assert_eq!(tracker.active(), Some(SectionId::Team));
}

#[test]
fn test_top_of_page_has_no_active_section() {
    let mut watcher = install();
    let mut page = PageState::new();

    let changed = page.apply_intersections(watcher.measure(0.0, VIEWPORT));
    assert!(!changed);
    assert_eq!(page.active_section(), None);

    // Still above the band: problem starts at 900, band ends at 300
    let changed = page.apply_intersections(watcher.measure(550.0, VIEWPORT));
    assert!(!changed);
    assert_eq!(page.active_section(), None);

    // Problem's top crosses into the band
    let changed = page.apply_intersections(watcher.measure(650.0, VIEWPORT));
    assert!(changed);
    assert_eq!(page.active_section(), Some(SectionId::Problem));
}

#[test]
fn test_scrolling_back_to_top_keeps_last_highlight() {
    let mut watcher = install();
    let mut page = PageState::new();

    page.apply_intersections(watcher.measure(2000.0, VIEWPORT));
    assert_eq!(page.active_section(), Some(SectionId::Solution));

    let changed = page.apply_intersections(watcher.measure(0.0, VIEWPORT));
    assert!(!changed);
    assert_eq!(page.active_section(), Some(SectionId::Solution));
}

#[test]
fn test_scroll_through_whole_page() {
    let mut watcher = install();
    let mut tracker = SectionTracker::new();
    let mut seen = Vec::new();

    let mut y = 0.0;
    while y < 900.0 + 6.0 * 1200.0 {
        if tracker.apply(watcher.measure(y, VIEWPORT)) {
            seen.push(tracker.active().unwrap());
        }
        y += 50.0;
    }

    assert_eq!(seen, SectionId::ALL.to_vec());
}

#[test]
fn test_missing_region_never_activates() {
    let mut watcher = ScrollWatcher::install(TriggerBand::default(), &SectionId::ALL, |id| {
        if id == SectionId::Individuals {
            None
        } else {
            layout(id)
        }
    });
    let mut tracker = SectionTracker::new();

    let mut y = 0.0;
    while y < 10_000.0 {
        tracker.apply(watcher.measure(y, VIEWPORT));
        assert_ne!(tracker.active(), Some(SectionId::Individuals));
        y += 100.0;
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn section_strategy() -> impl Strategy<Value = SectionId> {
    prop::sample::select(SectionId::ALL.to_vec())
}

fn entry_strategy() -> impl Strategy<Value = IntersectionEntry> {
    (section_strategy(), any::<bool>()).prop_map(|(id, is_intersecting)| IntersectionEntry {
        id,
        is_intersecting,
    })
}

proptest! {
    /// The active id is always the last intersecting entry seen
    #[test]
    fn active_is_last_intersecting(batches in prop::collection::vec(
        prop::collection::vec(entry_strategy(), 0..8),
        0..10,
    )) {
        let mut tracker = SectionTracker::new();
        let mut expected = None;

        for batch in batches {
            if let Some(last) = batch.iter().rev().find(|e| e.is_intersecting) {
                expected = Some(last.id);
            }
            tracker.apply(batch);
            prop_assert_eq!(tracker.active(), expected);
        }
    }

    /// A region overlaps the band iff some point of it lies strictly inside
    #[test]
    fn band_overlap_matches_definition(
        top in -5000.0f64..5000.0,
        height in 0.0f64..3000.0,
        viewport in 100.0f64..3000.0,
    ) {
        let band = TriggerBand::default();
        let band_top = viewport * band.top();
        let band_bottom = viewport * band.bottom();
        let expected = top < band_bottom && top + height > band_top;
        prop_assert_eq!(band.intersects(top, height, viewport), expected);
    }

    /// Re-measuring at the same offset never reports anything new
    #[test]
    fn remeasure_is_quiet(scroll in 0.0f64..9000.0) {
        let mut watcher = install();
        watcher.measure(scroll, VIEWPORT);
        prop_assert!(watcher.measure(scroll, VIEWPORT).is_empty());
    }
}
