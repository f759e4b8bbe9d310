//! Active-section tracking for the navigation bar.
//!
//! A region becomes active when its content crosses the trigger band, a
//! horizontal strip in the upper part of the viewport, rather than when it
//! is fully visible. This keeps short and tall neighbours from flickering
//! during fast scrolls.
//!
//! ```text
//! ┌──────────────────────────────┐  0%
//! │                              │
//! ├──────────────────────────────┤  20%  ┐
//! │        trigger band          │       ├ region overlapping here is "intersecting"
//! ├──────────────────────────────┤  30%  ┘
//! │                              │
//! │                              │
//! └──────────────────────────────┘  100%
//! ```
//!
//! Two watcher implementations feed the same [`SectionTracker`]:
//! - the webview's native intersection observer, configured with
//!   [`TriggerBand::root_margin`]
//! - [`ScrollWatcher`], which polls scroll offsets against known region
//!   extents with identical band semantics

use crate::error::{CoreError, CoreResult};
use crate::section::SectionId;

/// Viewport strip, as fractions of the viewport height, that activates a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    top: f64,
    bottom: f64,
}

impl TriggerBand {
    /// Create a band spanning `top..bottom` of the viewport height.
    pub fn new(top: f64, bottom: f64) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&top) || !(0.0..=1.0).contains(&bottom) || top >= bottom {
            return Err(CoreError::InvalidTriggerBand(format!(
                "expected 0 <= top < bottom <= 1, got {}..{}",
                top, bottom
            )));
        }
        Ok(Self { top, bottom })
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Observer root margin equivalent to this band (threshold 0).
    ///
    /// The default band renders as `-20% 0px -70% 0px`.
    pub fn root_margin(&self) -> String {
        format!(
            "-{:.0}% 0px -{:.0}% 0px",
            self.top * 100.0,
            (1.0 - self.bottom) * 100.0
        )
    }

    /// Whether a region overlaps the band.
    ///
    /// `top` is the region's top edge relative to the top of the viewport.
    pub fn intersects(&self, top: f64, height: f64, viewport_height: f64) -> bool {
        let band_top = viewport_height * self.top;
        let band_bottom = viewport_height * self.bottom;
        top < band_bottom && top + height > band_top
    }
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top: 0.20,
            bottom: 0.30,
        }
    }
}

/// One watcher notification: a region entered or left the trigger band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub id: SectionId,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn entered(id: SectionId) -> Self {
        Self {
            id,
            is_intersecting: true,
        }
    }

    pub fn left(id: SectionId) -> Self {
        Self {
            id,
            is_intersecting: false,
        }
    }
}

/// Holds the currently active section.
///
/// Starts empty. Each intersecting entry overwrites the active id in the
/// order it is processed, so when several regions enter in one batch the
/// last one wins. Leaving the band never clears the active id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<SectionId>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Apply a batch of notifications. Returns true if the active id changed.
    pub fn apply<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        let before = self.active;
        for entry in entries {
            if entry.is_intersecting {
                self.active = Some(entry.id);
            }
        }
        before != self.active
    }
}

/// Vertical extent of a region in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionExtent {
    pub top: f64,
    pub height: f64,
}

impl RegionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

#[derive(Debug, Clone)]
struct WatchedRegion {
    id: SectionId,
    extent: RegionExtent,
    // None until the first measurement
    intersecting: Option<bool>,
}

/// Scroll-offset polling watcher with trigger-band semantics.
///
/// Used where no native observer is available. Behaves like an
/// intersection observer: the first measurement reports every watched
/// region, later ones only report regions whose state flipped.
#[derive(Debug, Clone)]
pub struct ScrollWatcher {
    band: TriggerBand,
    regions: Vec<WatchedRegion>,
    connected: bool,
}

impl ScrollWatcher {
    /// Install over `ids`, resolving each region's extent with `lookup`.
    ///
    /// Regions the lookup cannot find are skipped without error; they
    /// simply never become active.
    pub fn install<F>(band: TriggerBand, ids: &[SectionId], mut lookup: F) -> Self
    where
        F: FnMut(SectionId) -> Option<RegionExtent>,
    {
        let mut regions = Vec::with_capacity(ids.len());
        for &id in ids {
            match lookup(id) {
                Some(extent) => regions.push(WatchedRegion {
                    id,
                    extent,
                    intersecting: None,
                }),
                None => tracing::debug!(section = %id, "Region not rendered, skipping"),
            }
        }

        Self {
            band,
            regions,
            connected: true,
        }
    }

    /// Sections actually being watched, in install order.
    pub fn watched(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.regions.iter().map(|r| r.id)
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Measure all regions at a scroll offset and report state changes.
    pub fn measure(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<IntersectionEntry> {
        if !self.connected {
            return Vec::new();
        }

        let band = self.band;
        self.regions
            .iter_mut()
            .filter_map(|region| {
                let relative_top = region.extent.top - scroll_y;
                let now = band.intersects(relative_top, region.extent.height, viewport_height);
                if region.intersecting == Some(now) {
                    return None;
                }
                region.intersecting = Some(now);
                Some(IntersectionEntry {
                    id: region.id,
                    is_intersecting: now,
                })
            })
            .collect()
    }

    /// Stop watching. Later measurements report nothing.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.regions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_margin() {
        assert_eq!(TriggerBand::default().root_margin(), "-20% 0px -70% 0px");
    }

    #[test]
    fn test_band_rejects_inverted_range() {
        assert!(TriggerBand::new(0.3, 0.2).is_err());
        assert!(TriggerBand::new(0.2, 0.2).is_err());
        assert!(TriggerBand::new(-0.1, 0.2).is_err());
        assert!(TriggerBand::new(0.1, 1.5).is_err());
        assert!(TriggerBand::new(0.0, 1.0).is_ok());
    }

    #[test]
    fn test_band_intersection() {
        let band = TriggerBand::default();
        // viewport 1000px -> band 200..300
        assert!(band.intersects(250.0, 10.0, 1000.0));
        assert!(band.intersects(-500.0, 750.0, 1000.0));
        assert!(!band.intersects(300.0, 400.0, 1000.0));
        assert!(!band.intersects(0.0, 200.0, 1000.0));
    }

    #[test]
    fn test_tracker_last_write_wins() {
        let mut tracker = SectionTracker::new();
        let changed = tracker.apply([
            IntersectionEntry::entered(SectionId::Problem),
            IntersectionEntry::entered(SectionId::Solution),
        ]);
        assert!(changed);
        assert_eq!(tracker.active(), Some(SectionId::Solution));
    }

    #[test]
    fn test_tracker_leave_keeps_active() {
        let mut tracker = SectionTracker::new();
        tracker.apply([IntersectionEntry::entered(SectionId::Team)]);
        let changed = tracker.apply([IntersectionEntry::left(SectionId::Team)]);
        assert!(!changed);
        assert_eq!(tracker.active(), Some(SectionId::Team));
    }

    #[test]
    fn test_watcher_skips_missing_regions() {
        let watcher = ScrollWatcher::install(TriggerBand::default(), &SectionId::ALL, |id| {
            (id != SectionId::Security).then(|| RegionExtent::new(0.0, 100.0))
        });
        let watched: Vec<_> = watcher.watched().collect();
        assert_eq!(watched.len(), 5);
        assert!(!watched.contains(&SectionId::Security));
    }

    #[test]
    fn test_watcher_reports_only_changes() {
        let mut watcher = ScrollWatcher::install(
            TriggerBand::default(),
            &[SectionId::Problem, SectionId::Solution],
            |id| match id {
                SectionId::Problem => Some(RegionExtent::new(1000.0, 800.0)),
                SectionId::Solution => Some(RegionExtent::new(1800.0, 800.0)),
                _ => None,
            },
        );

        let first = watcher.measure(0.0, 1000.0);
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|e| !e.is_intersecting));

        assert!(watcher.measure(10.0, 1000.0).is_empty());

        let entered = watcher.measure(900.0, 1000.0);
        assert_eq!(entered, vec![IntersectionEntry::entered(SectionId::Problem)]);
    }

    #[test]
    fn test_disconnect_stops_reporting() {
        let mut watcher = ScrollWatcher::install(TriggerBand::default(), &SectionId::ALL, |_| {
            Some(RegionExtent::new(0.0, 10_000.0))
        });
        watcher.disconnect();
        assert!(!watcher.is_connected());
        assert!(watcher.measure(0.0, 1000.0).is_empty());
        assert_eq!(watcher.watched().count(), 0);
    }
}
