//! Panel set
//!
//! Every panel stays in the tree; inactive ones are only `hidden`, so
//! whatever lives inside them survives a tab switch.

use ariatabs_tabs::{Content, TabGroupState, TabIds};

use crate::element::{Element, Node};

#[derive(Debug, Clone)]
struct Panel {
    ids: TabIds,
    content: Content,
    /// Retained scroll offset, reported back by the host
    scroll_top: u32,
}

#[derive(Debug, Clone, Default)]
pub struct PanelSet {
    panels: Vec<Panel>,
}

impl PanelSet {
    pub fn new<I>(panels: I) -> Self
    where
        I: IntoIterator<Item = (TabIds, Content)>,
    {
        Self {
            panels: panels
                .into_iter()
                .map(|(ids, content)| Panel {
                    ids,
                    content,
                    scroll_top: 0,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn scroll_top(&self, index: usize) -> Option<u32> {
        self.panels.get(index).map(|p| p.scroll_top)
    }

    /// Record a panel's scroll offset. Returns false for an unknown index.
    pub fn set_scroll_top(&mut self, index: usize, scroll_top: u32) -> bool {
        match self.panels.get_mut(index) {
            Some(panel) => {
                panel.scroll_top = scroll_top;
                true
            }
            None => false,
        }
    }

    pub fn render(&self, state: &TabGroupState) -> Vec<Element> {
        self.panels
            .iter()
            .enumerate()
            .map(|(index, panel)| Self::render_panel(panel, state.is_active(index)))
            .collect()
    }

    fn render_panel(panel: &Panel, visible: bool) -> Element {
        let mut el = Element::new("div")
            .attr("tabindex", "0")
            .attr("role", "tabpanel")
            .attr("id", panel.ids.panel.as_str())
            .attr("aria-labelledby", panel.ids.tab.as_str());

        if !visible {
            el = el.flag("hidden");
        }
        if panel.scroll_top > 0 {
            el = el.attr("data-scroll-top", panel.scroll_top.to_string());
        }

        el.children_from(render_content(&panel.content))
    }
}

fn render_content(content: &Content) -> Vec<Node> {
    match content {
        Content::Text(text) => vec![Node::Text(text.clone())],
        Content::Paragraphs(paragraphs) => paragraphs
            .iter()
            .map(|p| Node::Element(Element::new("p").text(p.as_str())))
            .collect(),
        Content::Html(markup) => vec![Node::Raw(markup.clone())],
    }
}
