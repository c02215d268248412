//! Tab item data structure
//!
//! Supplied wholesale by the host at mount and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::Result;

/// Panel payload. The widget never inspects it beyond rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Content {
    /// Plain text, escaped on output
    Text(String),
    /// One paragraph per entry, escaped on output
    Paragraphs(Vec<String>),
    /// Trusted markup, passed through untouched
    Html(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabItem {
    /// Label shown on the tab control; also the source of derived ids
    pub title: String,
    /// Panel payload
    #[serde(default)]
    pub content: Content,
}

impl TabItem {
    pub fn new(title: impl Into<String>, content: Content) -> Result<Self> {
        let item = Self {
            title: title.into(),
            content,
        };
        item.validate()?;
        Ok(item)
    }

    /// Check invariants that deserialised items skip
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TabError::EmptyTitle);
        }
        Ok(())
    }
}
