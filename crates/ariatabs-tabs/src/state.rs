//! Tab group state
//!
//! `0 <= active_index < item_count` whenever `item_count > 0`.
//! `item_count` is fixed when the group mounts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroupState {
    active_index: usize,
    item_count: usize,
}

impl TabGroupState {
    /// Fresh state with the first tab active
    pub fn new(item_count: usize) -> Self {
        Self {
            active_index: 0,
            item_count,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.item_count
    }

    /// True when `index` is the active tab of a non-empty group
    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.active_index == index
    }

    /// Move to `index`. Returns the previous index if it changed.
    pub(crate) fn set_active(&mut self, index: usize) -> Option<usize> {
        debug_assert!(self.contains(index));
        if self.active_index == index {
            return None;
        }
        let previous = self.active_index;
        self.active_index = index;
        Some(previous)
    }
}
