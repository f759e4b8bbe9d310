//! Named page regions that drive navigation highlighting.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A tracked region of the landing page.
///
/// The string form doubles as the DOM element id of the region, so the
/// order and spelling here are the contract between the page markup and
/// the viewport watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Problem,
    Solution,
    Enterprise,
    Individuals,
    Security,
    Team,
}

impl SectionId {
    /// All tracked sections in page order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Problem,
        SectionId::Solution,
        SectionId::Enterprise,
        SectionId::Individuals,
        SectionId::Security,
        SectionId::Team,
    ];

    /// Element id of the region in the rendered page
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Problem => "problem",
            SectionId::Solution => "solution",
            SectionId::Enterprise => "enterprise",
            SectionId::Individuals => "individuals",
            SectionId::Security => "security",
            SectionId::Team => "team",
        }
    }

    /// Navigation link text
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Problem => "Problem",
            SectionId::Solution => "Solution",
            SectionId::Enterprise => "Enterprise",
            SectionId::Individuals => "Individuals",
            SectionId::Security => "Security",
            SectionId::Team => "Team",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "pricing".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSection(ref s) if s == "pricing"));
    }

    #[test]
    fn test_page_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            ids,
            ["problem", "solution", "enterprise", "individuals", "security", "team"]
        );
    }
}
