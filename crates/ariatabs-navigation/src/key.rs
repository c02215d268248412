//! Key resolution
//!
//! Translates DOM `KeyboardEvent.key` values into navigation intents,
//! honouring the tab list's orientation and text direction.

use serde::{Deserialize, Serialize};

use crate::intent::NavigationIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// A keydown event as delivered to the tab list.
///
/// Mirrors the two parts of a DOM keyboard event the widget cares about:
/// the key identifier and whether the default action was suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    key: String,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Suppress the browser's default action (page scroll for arrows, Home, End)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyResolver {
    orientation: Orientation,
    direction: Direction,
}

impl KeyResolver {
    pub fn new(orientation: Orientation, direction: Direction) -> Self {
        Self {
            orientation,
            direction,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Resolve a key identifier into an intent, or `None` to let it pass through
    pub fn resolve(&self, key: &str) -> Option<NavigationIntent> {
        match key {
            "Home" => return Some(NavigationIntent::First),
            "End" => return Some(NavigationIntent::Last),
            _ => {}
        }

        if let Some(intent) = self.resolve_arrow(key) {
            return Some(intent);
        }

        match key {
            "next" => Some(NavigationIntent::Next),
            "previous" => Some(NavigationIntent::Previous),
            "first" => Some(NavigationIntent::First),
            "last" => Some(NavigationIntent::Last),
            _ => None,
        }
    }

    fn resolve_arrow(&self, key: &str) -> Option<NavigationIntent> {
        match self.orientation {
            Orientation::Horizontal => {
                let (forward, back) = match self.direction {
                    Direction::Ltr => ("ArrowRight", "ArrowLeft"),
                    Direction::Rtl => ("ArrowLeft", "ArrowRight"),
                };
                if key == forward {
                    Some(NavigationIntent::Next)
                } else if key == back {
                    Some(NavigationIntent::Previous)
                } else {
                    None
                }
            }
            Orientation::Vertical => match key {
                "ArrowDown" => Some(NavigationIntent::Next),
                "ArrowUp" => Some(NavigationIntent::Previous),
                _ => None,
            },
        }
    }
}
