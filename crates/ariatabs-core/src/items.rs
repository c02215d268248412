//! Loading tab items supplied as JSON

use std::path::Path;

use ariatabs_tabs::TabItem;

use crate::Result;

/// Parse a JSON array of `{ "title": ..., "content": ... }` objects
pub fn items_from_json(json: &str) -> Result<Vec<TabItem>> {
    let items: Vec<TabItem> = serde_json::from_str(json)?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}

pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<TabItem>> {
    let json = std::fs::read_to_string(path)?;
    items_from_json(&json)
}
