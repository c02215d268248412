//! ariatabs Tab Group
//!
//! Owns the single source of truth for a tab group: which index is active.
//! ```text
//! "k active" ── next / previous / first / last ──▶ "k' active"
//!            └─ activate(i) (pointer, host code) ─▶ "i active"
//! ```
//! Initial state is index 0; there is no terminal state while mounted.

mod controller;
mod error;
mod ids;
mod item;
mod state;

pub use controller::{ActivationSource, ActiveChange, SubscriptionId, TabGroupController};
pub use error::TabError;
pub use ids::{normalize_title, IdScheme, TabIds};
pub use item::{Content, TabItem};
pub use state::TabGroupState;

pub type Result<T> = std::result::Result<T, TabError>;
