//! Accessible id derivation
//!
//! Every tab control and its panel reference each other by id:
//! `tab[aria-controls] == panel[id]` and `panel[aria-labelledby] == tab[id]`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabIds {
    /// Id of the tab control
    pub tab: String,
    /// Id of the panel the tab controls
    pub panel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "lowercase")]
pub enum IdScheme {
    /// Derive ids from the title: whitespace becomes `-`, the panel gets a
    /// `-tab` suffix. Titles that normalise to the same string collide.
    #[default]
    Title,
    /// Derive ids from position under a per-group prefix
    Index {
        #[serde(default)]
        prefix: Option<String>,
    },
}

impl IdScheme {
    /// Fill in a generated prefix so ids stay stable for the life of the mount
    pub fn resolved(self) -> Self {
        match self {
            IdScheme::Index { prefix: None } => {
                let simple = Uuid::new_v4().simple().to_string();
                IdScheme::Index {
                    prefix: Some(format!("tabs-{}", &simple[..8])),
                }
            }
            other => other,
        }
    }

    pub fn derive(&self, index: usize, title: &str) -> TabIds {
        match self {
            IdScheme::Title => {
                let tab = normalize_title(title);
                let panel = format!("{}-tab", tab);
                TabIds { tab, panel }
            }
            IdScheme::Index { prefix } => {
                let prefix = prefix.as_deref().unwrap_or("tabs");
                TabIds {
                    tab: format!("{}-tab-{}", prefix, index),
                    panel: format!("{}-panel-{}", prefix, index),
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdScheme::Title => "title",
            IdScheme::Index { .. } => "index",
        }
    }
}

/// Replace every whitespace character with `-`
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
