//! Tab strip
//!
//! One `button[role=tab]` per item inside a labelled `div[role=tablist]`.
//! Roving tabindex: only the active control is a sequential tab stop.

use ariatabs_navigation::Orientation;
use ariatabs_tabs::{TabGroupState, TabIds};

use crate::element::Element;

#[derive(Debug, Clone)]
struct StripTab {
    title: String,
    ids: TabIds,
}

#[derive(Debug, Clone)]
pub struct TabStrip {
    /// Accessible name of the tab list
    label: String,
    orientation: Orientation,
    tabs: Vec<StripTab>,
}

impl TabStrip {
    /// `tabs` pairs each title with the ids derived for it at mount
    pub fn new<I>(label: impl Into<String>, orientation: Orientation, tabs: I) -> Self
    where
        I: IntoIterator<Item = (String, TabIds)>,
    {
        Self {
            label: label.into(),
            orientation,
            tabs: tabs
                .into_iter()
                .map(|(title, ids)| StripTab { title, ids })
                .collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn ids(&self, index: usize) -> Option<&TabIds> {
        self.tabs.get(index).map(|tab| &tab.ids)
    }

    /// Resolve a rendered tab control id back to its index.
    ///
    /// With colliding ids the first match wins.
    pub fn index_of(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.ids.tab == tab_id)
    }

    pub fn render(&self, state: &TabGroupState) -> Element {
        let mut list = Element::new("div")
            .attr("role", "tablist")
            .attr("aria-label", self.label.as_str());

        if self.orientation == Orientation::Vertical {
            list = list.attr("aria-orientation", self.orientation.as_str());
        }

        list.children_from(
            self.tabs
                .iter()
                .enumerate()
                .map(|(index, tab)| Self::render_tab(tab, state.is_active(index))),
        )
    }

    fn render_tab(tab: &StripTab, selected: bool) -> Element {
        let button = Element::new("button")
            .attr("role", "tab")
            .attr("type", "button")
            .attr("aria-selected", if selected { "true" } else { "false" })
            .attr("aria-controls", tab.ids.panel.as_str())
            .attr("id", tab.ids.tab.as_str());

        let button = if selected {
            button
        } else {
            button.attr("tabindex", "-1")
        };

        button.text(tab.title.as_str())
    }
}
