//! Page-level UI state.
//!
//! Owned by the top-level view. Child components read it and request
//! changes through callbacks; nothing else mutates it.

use crate::section::SectionId;
use crate::tracker::{IntersectionEntry, SectionTracker};
use crate::waitlist::WaitlistFlow;

/// Scroll offset (px) past which the back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub tracker: SectionTracker,
    pub waitlist: WaitlistFlow,
    pub mobile_menu_open: bool,
    pub show_back_to_top: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.tracker.active()
    }

    /// Feed watcher notifications. Returns true if the highlight moved.
    pub fn apply_intersections<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        self.tracker.apply(entries)
    }

    pub fn set_scroll_offset(&mut self, scroll_y: f64) {
        self.show_back_to_top = scroll_y > BACK_TO_TOP_THRESHOLD;
    }

    pub fn open_waitlist(&mut self) {
        self.mobile_menu_open = false;
        self.waitlist.open();
    }

    pub fn close_waitlist(&mut self) {
        self.waitlist.close();
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
