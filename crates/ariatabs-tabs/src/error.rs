//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab title cannot be empty")]
    EmptyTitle,

    #[error("Tab index {index} out of range for {count} tabs")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Tab group has no items")]
    NoItems,
}
