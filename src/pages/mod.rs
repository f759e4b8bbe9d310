//! Page components for AigenticPay.

mod landing;

pub use landing::Landing;
