//! ariatabs Rendering
//!
//! Builds the accessible structure of a tab group:
//! - `div[role=tablist]` holding one `button[role=tab]` per item
//! - one `div[role=tabpanel]` per item, hidden unless active
//!
//! Output is an element tree that hosts can inspect or serialise to HTML.

mod element;
mod html;
mod panels;
mod strip;

pub use element::{Attribute, Element, Node};
pub use html::{escape_attr, escape_text};
pub use panels::PanelSet;
pub use strip::TabStrip;
