//! Form payload sent to the waitlist endpoint.

use chrono::{DateTime, Local, TimeZone};

use crate::email::EmailAddress;

/// Locale-style timestamp, e.g. `3/7/2026, 4:05:09 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One waitlist entry as delivered to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: EmailAddress,
    pub timestamp: String,
    pub source: String,
}

impl Submission {
    /// Stamp a submission with the current local time.
    pub fn new(email: EmailAddress, source: impl Into<String>) -> Self {
        Self::at(email, source, &Local::now())
    }

    pub fn at<Tz>(email: EmailAddress, source: impl Into<String>, when: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            email,
            timestamp: format_timestamp(when),
            source: source.into(),
        }
    }

    /// Fields in the order they are form-encoded.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("email", self.email.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("source", self.source.as_str()),
        ]
    }
}

pub fn format_timestamp<Tz>(when: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    when.format(TIMESTAMP_FORMAT).to_string()
}
