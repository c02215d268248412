//! ariatabs Core
//!
//! Composes the controller, tab strip and panel set into one mounted widget.
//! Events go in through [`TabGroup::on_key_down`] and [`TabGroup::on_click`];
//! the host then renders and commits, which is when focus moves.

mod config;
mod error;
mod focus;
mod items;
mod widget;

pub use config::Config;
pub use error::CoreError;
pub use focus::FocusScheduler;
pub use items::{items_from_json, load_items};
pub use widget::TabGroup;

// Re-export the building blocks
pub use ariatabs_navigation::{
    handle_navigation_key, Direction, KeyEvent, KeyResolver, NavigationError, NavigationIntent,
    Orientation,
};
pub use ariatabs_render::{Element, Node, PanelSet, TabStrip};
pub use ariatabs_tabs::{
    ActivationSource, ActiveChange, Content, IdScheme, SubscriptionId, TabError,
    TabGroupController, TabGroupState, TabIds, TabItem,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
