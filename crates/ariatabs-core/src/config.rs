//! Widget configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use ariatabs_navigation::{Direction, KeyResolver, Orientation};
use ariatabs_tabs::IdScheme;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accessible name of the tab list
    pub label: String,
    /// How tab and panel ids are derived
    pub id_scheme: IdScheme,
    /// Which arrow keys move between tabs
    pub orientation: Orientation,
    /// Text direction; right-to-left swaps the horizontal arrows
    pub direction: Direction,
    /// Focus the first tab as soon as the group mounts
    pub autofocus_on_mount: bool,
}

impl Config {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(CoreError::Config(
                "Tab list label cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolver(&self) -> KeyResolver {
        KeyResolver::new(self.orientation, self.direction)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: "Tabs".to_string(),
            id_scheme: IdScheme::Title,
            orientation: Orientation::Horizontal,
            direction: Direction::Ltr,
            autofocus_on_mount: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.label, "Tabs");
        assert_eq!(config.id_scheme, IdScheme::Title);
        assert!(!config.autofocus_on_mount);
        assert_eq!(config.resolver(), KeyResolver::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(
            r#"{
                "label": "Entertainment",
                "orientation": "vertical",
                "id_scheme": { "scheme": "index", "prefix": "music" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.label, "Entertainment");
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.direction, Direction::Ltr);
        assert_eq!(
            config.id_scheme,
            IdScheme::Index {
                prefix: Some("music".to_string())
            }
        );
    }

    #[test]
    fn test_empty_label_rejected() {
        let result = Config::from_json(r#"{ "label": "  " }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = Config::from_json("{ label: ");
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/ariatabs.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
