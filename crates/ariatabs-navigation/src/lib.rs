//! ariatabs Keyboard Navigation
//!
//! WAI-ARIA tabs keyboard model:
//! - next / previous → move one tab, wrapping at both ends
//! - first (Home) → first tab
//! - last (End) → last tab
//! - any other key → not intercepted

mod error;
mod intent;
mod key;

pub use error::NavigationError;
pub use intent::{handle_navigation_key, NavigationIntent};
pub use key::{Direction, KeyEvent, KeyResolver, Orientation};

pub type Result<T> = std::result::Result<T, NavigationError>;
