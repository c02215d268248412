//! Navigation intents
//!
//! The four moves a tab list understands, independent of which physical key
//! produced them.

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::key::KeyResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationIntent {
    /// One tab forward, wrapping from last to first
    Next,
    /// One tab back, wrapping from first to last
    Previous,
    /// Jump to the first tab
    First,
    /// Jump to the last tab
    Last,
}

impl NavigationIntent {
    /// Compute the index this intent lands on.
    ///
    /// Returns `None` for an empty group, since there is nothing to land on.
    pub fn apply(&self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }

        debug_assert!(current < count, "current index {current} out of range for {count} tabs");
        let current = current % count;

        let next = match self {
            NavigationIntent::Next => (current + 1) % count,
            NavigationIntent::Previous => (current + count - 1) % count,
            NavigationIntent::First => 0,
            NavigationIntent::Last => count - 1,
        };

        Some(next)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationIntent::Next => "next",
            NavigationIntent::Previous => "previous",
            NavigationIntent::First => "first",
            NavigationIntent::Last => "last",
        }
    }
}

impl std::fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NavigationIntent {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" => Ok(NavigationIntent::Next),
            "previous" | "prev" => Ok(NavigationIntent::Previous),
            "first" | "home" => Ok(NavigationIntent::First),
            "last" | "end" => Ok(NavigationIntent::Last),
            _ => Err(NavigationError::UnknownIntent(s.to_string())),
        }
    }
}

/// Map a key identifier to the next active index.
///
/// Accepts DOM key names for a horizontal, left-to-right tab list
/// (`ArrowRight`, `ArrowLeft`, `Home`, `End`) as well as the intent names
/// `next`, `previous`, `first` and `last`. Any other key yields `None` and
/// must not be intercepted by the caller.
pub fn handle_navigation_key(key: &str, current: usize, count: usize) -> Option<usize> {
    KeyResolver::default()
        .resolve(key)
        .and_then(|intent| intent.apply(current, count))
}
