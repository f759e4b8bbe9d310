//! UI Components for the AigenticPay landing page.

mod back_to_top;
mod detail_card;
mod footer;
mod icons;
mod nav_header;
mod section_heading;
pub mod viewport;
mod waitlist_modal;

pub use back_to_top::BackToTop;
pub use detail_card::{DetailCard, PopupPlacement};
pub use footer::Footer;
pub use icons::{Icon, IconKind};
pub use nav_header::NavHeader;
pub use section_heading::SectionHeading;
pub use viewport::use_viewport_watcher;
pub use waitlist_modal::WaitlistModal;
