//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Unknown navigation intent: {0}")]
    UnknownIntent(String),
}
