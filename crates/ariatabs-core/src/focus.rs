//! Focus scheduling
//!
//! Focus requests are queued and only applied when a rendered tree is
//! committed, and only onto an element that tree actually contains.

use ariatabs_render::Element;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusScheduler {
    /// Id waiting for the next commit
    pending: Option<String>,
    /// Id of the element that currently holds focus
    focused: Option<String>,
}

impl FocusScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a focus move. A later request replaces an earlier one.
    pub fn request(&mut self, id: impl Into<String>) {
        self.pending = Some(id.into());
    }

    /// Focus an element that is already on screen, as a click does
    pub fn focus_now(&mut self, id: impl Into<String>) {
        self.focused = Some(id.into());
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Apply the pending request against a committed tree.
    ///
    /// Returns the newly focused id. A request whose target is missing from
    /// the tree stays pending.
    pub fn flush(&mut self, committed: &Element) -> Option<&str> {
        let target = self.pending.as_deref()?;
        committed.find_by_id(target)?;

        self.focused = self.pending.take();
        tracing::debug!(element = ?self.focused, "Focus moved");
        self.focused.as_deref()
    }
}
