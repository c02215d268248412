//! Mounted tab group
//!
//! Owns the controller, the tab strip, the panel set and the focus
//! scheduler for one mount. Dropping it unmounts the group.

use parking_lot::Mutex;
use std::sync::Arc;

use ariatabs_navigation::{KeyEvent, NavigationIntent};
use ariatabs_render::{Element, PanelSet, TabStrip};
use ariatabs_tabs::{
    ActivationSource, SubscriptionId, TabError, TabGroupController, TabGroupState, TabIds,
    TabItem,
};

use crate::config::Config;
use crate::focus::FocusScheduler;
use crate::Result;

pub struct TabGroup {
    config: Config,
    /// Single writer of the active index
    controller: TabGroupController,
    strip: TabStrip,
    panels: PanelSet,
    /// Shared with the controller subscription that schedules focus moves
    focus: Arc<Mutex<FocusScheduler>>,
    subscription: SubscriptionId,
    /// Tree from the last commit
    committed: Option<Element>,
}

impl TabGroup {
    /// Mount a group over a fixed list of items.
    ///
    /// An empty list is a caller bug: it panics in debug builds and yields an
    /// inert group in release builds.
    pub fn mount(items: Vec<TabItem>, config: Config) -> Result<Self> {
        config.validate()?;
        for item in &items {
            item.validate()?;
        }

        debug_assert!(!items.is_empty(), "TabGroup mounted without items");
        if items.is_empty() {
            tracing::warn!(label = %config.label, "Mounting inert tab group: {}", TabError::NoItems);
        }

        let mut config = config;
        config.id_scheme = config.id_scheme.resolved();

        let ids: Vec<TabIds> = items
            .iter()
            .enumerate()
            .map(|(index, item)| config.id_scheme.derive(index, &item.title))
            .collect();

        let strip = TabStrip::new(
            config.label.clone(),
            config.orientation,
            items
                .iter()
                .zip(&ids)
                .map(|(item, ids)| (item.title.clone(), ids.clone())),
        );
        let panels = PanelSet::new(
            items
                .into_iter()
                .zip(&ids)
                .map(|(item, ids)| (ids.clone(), item.content)),
        );

        let controller = TabGroupController::new(strip.len(), config.resolver());
        let focus = Arc::new(Mutex::new(FocusScheduler::new()));

        let subscription = {
            let focus = Arc::clone(&focus);
            let tab_ids: Vec<String> = ids.iter().map(|ids| ids.tab.clone()).collect();
            controller.subscribe(move |change| {
                if let Some(id) = tab_ids.get(change.current) {
                    focus.lock().request(id.as_str());
                }
            })
        };

        if config.autofocus_on_mount {
            if let Some(first) = ids.first() {
                focus.lock().request(first.tab.as_str());
            }
        }

        tracing::info!(
            label = %config.label,
            tabs = strip.len(),
            id_scheme = config.id_scheme.as_str(),
            "Mounted tab group"
        );

        Ok(Self {
            config,
            controller,
            strip,
            panels,
            focus,
            subscription,
            committed: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle for subscribing to active-index changes
    pub fn controller(&self) -> &TabGroupController {
        &self.controller
    }

    pub fn state(&self) -> TabGroupState {
        self.controller.state()
    }

    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    pub fn len(&self) -> usize {
        self.strip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    pub fn ids(&self, index: usize) -> Option<&TabIds> {
        self.strip.ids(index)
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    /// Host-reported panel scroll offsets, kept across tab switches
    pub fn panels_mut(&mut self) -> &mut PanelSet {
        &mut self.panels
    }

    /// Activate a tab from host code. See [`TabGroupController::activate`].
    pub fn activate(&self, index: usize) -> bool {
        self.controller.activate(index)
    }

    /// Keydown on the tab list
    pub fn on_key_down(&self, event: &mut KeyEvent) -> Option<usize> {
        self.controller.handle_key(event)
    }

    /// Apply a navigation intent directly, as a keyboard move
    pub fn navigate(&self, intent: NavigationIntent) -> Option<usize> {
        self.controller.navigate(intent)
    }

    /// Click on a rendered tab control, identified by its id
    pub fn on_click(&self, tab_id: &str) -> Option<usize> {
        let Some(index) = self.strip.index_of(tab_id) else {
            tracing::trace!(target_id = %tab_id, "Click outside tab controls");
            return None;
        };

        // The browser focuses a clicked button itself
        self.focus.lock().focus_now(tab_id);
        self.controller.activate_from(index, ActivationSource::Pointer);

        Some(index)
    }

    /// Build the tree for the current state
    pub fn render(&self) -> Element {
        let state = self.controller.state();

        Element::new("div")
            .child(self.strip.render(&state))
            .children_from(self.panels.render(&state))
    }

    /// Commit a rendered tree and run any focus move waiting on it.
    /// Returns the id that received focus, if one did.
    pub fn commit(&mut self, tree: Element) -> Option<String> {
        let focused = self.focus.lock().flush(&tree).map(str::to_string);
        self.committed = Some(tree);
        focused
    }

    /// Render and commit in one step
    pub fn update(&mut self) -> &Element {
        let tree = self.render();
        self.focus.lock().flush(&tree);
        self.committed.insert(tree)
    }

    pub fn committed(&self) -> Option<&Element> {
        self.committed.as_ref()
    }

    pub fn focused_id(&self) -> Option<String> {
        self.focus.lock().focused().map(str::to_string)
    }

    pub fn pending_focus(&self) -> Option<String> {
        self.focus.lock().pending().map(str::to_string)
    }

    /// Focus leaves the widget
    pub fn blur(&self) {
        self.focus.lock().blur();
    }
}

impl Drop for TabGroup {
    fn drop(&mut self) {
        self.controller.unsubscribe(self.subscription);
        tracing::debug!(label = %self.config.label, "Unmounted tab group");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariatabs_tabs::{ActiveChange, Content, IdScheme};
    use scraper::{Html, Selector};

    fn items(titles: &[&str]) -> Vec<TabItem> {
        titles
            .iter()
            .map(|t| TabItem::new(*t, Content::Text(format!("{} content", t))).unwrap())
            .collect()
    }

    fn abcd() -> TabGroup {
        TabGroup::mount(
            items(&["Tab A", "Tab B", "Tab C", "Tab D"]),
            Config::new("Letters"),
        )
        .unwrap()
    }

    fn press(group: &mut TabGroup, key: &str) -> KeyEvent {
        let mut event = KeyEvent::new(key);
        group.on_key_down(&mut event);
        group.update();
        event
    }

    /// (index in tab order, index of visible panel)
    fn tab_stop_and_visible(tree: &Element) -> (Vec<usize>, Vec<usize>) {
        let stops = tree
            .find_all_by_role("tab")
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.has_attr("tabindex"))
            .map(|(i, _)| i)
            .collect();
        let visible = tree
            .find_all_by_role("tabpanel")
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.has_attr("hidden"))
            .map(|(i, _)| i)
            .collect();
        (stops, visible)
    }

    #[test]
    fn test_mount_renders_first_tab() {
        let mut group = abcd();
        assert_eq!(group.active_index(), 0);
        assert_eq!(group.focused_id(), None);

        let tree = group.update().clone();
        assert_eq!(tab_stop_and_visible(&tree), (vec![0], vec![0]));
        assert_eq!(group.focused_id(), None);
    }

    #[test]
    fn test_keyboard_scenario() {
        let mut group = abcd();
        group.update();

        let end = press(&mut group, "End");
        assert!(end.is_default_prevented());
        assert_eq!(group.active_index(), 3);
        assert_eq!(group.focused_id().as_deref(), Some("Tab-D"));

        let tree = group.committed().unwrap();
        assert_eq!(tab_stop_and_visible(tree), (vec![3], vec![3]));
        assert_eq!(tree.find_by_id("Tab-D").unwrap().text_content(), "Tab D");

        press(&mut group, "ArrowRight");
        assert_eq!(group.active_index(), 0);
        assert_eq!(group.focused_id().as_deref(), Some("Tab-A"));

        group.activate(2);
        group.update();
        press(&mut group, "Home");
        assert_eq!(group.active_index(), 0);

        press(&mut group, "ArrowLeft");
        assert_eq!(group.active_index(), 3);
        assert_eq!(group.focused_id().as_deref(), Some("Tab-D"));
    }

    #[test]
    fn test_other_keys_pass_through() {
        let mut group = abcd();
        group.update();

        let tab = press(&mut group, "Tab");
        assert!(!tab.is_default_prevented());
        let space = press(&mut group, " ");
        assert!(!space.is_default_prevented());
        assert_eq!(group.active_index(), 0);
    }

    #[test]
    fn test_click_third_tab() {
        let mut group = abcd();
        group.activate(3);
        group.update();

        assert_eq!(group.on_click("Tab-C"), Some(2));
        assert_eq!(group.active_index(), 2);
        assert_eq!(group.focused_id().as_deref(), Some("Tab-C"));

        let tree = group.update().clone();
        assert_eq!(tab_stop_and_visible(&tree), (vec![2], vec![2]));
        assert_eq!(group.focused_id().as_deref(), Some("Tab-C"));
    }

    #[test]
    fn test_click_outside_tabs() {
        let group = abcd();
        assert_eq!(group.on_click("Tab-C-tab"), None);
        assert_eq!(group.focused_id(), None);
    }

    #[test]
    fn test_focus_waits_for_commit() {
        let mut group = abcd();
        group.update();

        let mut end = KeyEvent::new("End");
        group.on_key_down(&mut end);
        assert_eq!(group.focused_id(), None);
        assert_eq!(group.pending_focus().as_deref(), Some("Tab-D"));

        let tree = group.render();
        assert_eq!(group.focused_id(), None);

        assert_eq!(group.commit(tree).as_deref(), Some("Tab-D"));
        assert_eq!(group.pending_focus(), None);
    }

    #[test]
    fn test_reactivating_does_not_move_focus() {
        let mut group = abcd();
        group.activate(1);
        group.update();
        group.blur();

        assert!(!group.activate(1));
        assert_eq!(group.pending_focus(), None);
        assert_eq!(group.update().find_all_by_role("tab").len(), 4);
        assert_eq!(group.focused_id(), None);
        assert_eq!(group.active_index(), 1);
    }

    #[test]
    fn test_cross_references_match() {
        let mut group = abcd();
        for k in 0..4 {
            group.activate(k);
            let tree = group.update().clone();

            let tab = tree.find_all_by_role("tab")[k];
            let panel = tree
                .find_all_by_role("tabpanel")
                .into_iter()
                .find(|p| !p.has_attr("hidden"))
                .unwrap();

            assert_eq!(tab.get_attr("aria-controls"), panel.id());
            assert_eq!(panel.get_attr("aria-labelledby"), tab.id());
            assert_eq!(tree.find_by_id(panel.id().unwrap()).unwrap().role(), Some("tabpanel"));
        }
    }

    #[test]
    fn test_invariant_holds_across_events() {
        let mut group = abcd();
        group.update();

        for key in ["ArrowRight", "ArrowRight", "End", "Escape", "ArrowLeft", "Home", "ArrowLeft"] {
            press(&mut group, key);
            let (stops, visible) = tab_stop_and_visible(group.committed().unwrap());
            assert_eq!(stops.len(), 1);
            assert_eq!(stops, visible);
            assert_eq!(stops[0], group.active_index());
        }
    }

    #[test]
    fn test_panels_stay_mounted() {
        let mut group = abcd();
        group.panels_mut().set_scroll_top(0, 120);

        press(&mut group, "End");
        let tree = group.committed().unwrap();
        assert_eq!(tree.find_all_by_role("tabpanel").len(), 4);

        let first_panel = tree.find_by_id("Tab-A-tab").unwrap();
        assert!(first_panel.has_attr("hidden"));
        assert_eq!(first_panel.text_content(), "Tab A content");

        press(&mut group, "Home");
        assert_eq!(group.panels().scroll_top(0), Some(120));
    }

    #[test]
    fn test_autofocus_on_mount() {
        let config = Config {
            autofocus_on_mount: true,
            ..Config::new("Letters")
        };
        let mut group = TabGroup::mount(items(&["One", "Two"]), config).unwrap();
        assert_eq!(group.focused_id(), None);
        group.update();
        assert_eq!(group.focused_id().as_deref(), Some("One"));
    }

    #[test]
    fn test_index_scheme_and_vertical() {
        let config = Config {
            id_scheme: IdScheme::Index {
                prefix: Some("music".to_string()),
            },
            orientation: ariatabs_navigation::Orientation::Vertical,
            ..Config::new("Artists")
        };
        let mut group = TabGroup::mount(items(&["Same", "Same"]), config).unwrap();

        let mut right = KeyEvent::new("ArrowRight");
        assert_eq!(group.on_key_down(&mut right), None);
        assert!(!right.is_default_prevented());

        let mut down = KeyEvent::new("ArrowDown");
        assert_eq!(group.on_key_down(&mut down), Some(1));
        group.update();
        assert_eq!(group.focused_id().as_deref(), Some("music-tab-1"));
        assert_eq!(group.ids(1).map(|ids| ids.panel.as_str()), Some("music-panel-1"));
    }

    #[test]
    fn test_host_subscription() {
        let group = abcd();
        let seen = Arc::new(Mutex::new(Vec::<ActiveChange>::new()));
        let sink = Arc::clone(&seen);
        group.controller().subscribe(move |change| sink.lock().push(*change));

        group.on_click("Tab-B");
        let mut end = KeyEvent::new("End");
        group.on_key_down(&mut end);

        let sources: Vec<_> = seen.lock().iter().map(|c| c.source).collect();
        assert_eq!(
            sources,
            vec![ActivationSource::Pointer, ActivationSource::Keyboard]
        );
    }

    #[test]
    fn test_drop_unsubscribes() {
        let group = abcd();
        let controller = group.controller().clone();
        drop(group);

        // The focus subscription is gone; activating must not touch it
        assert!(controller.activate(2));
    }

    #[test]
    fn test_html_output() {
        let mut group = TabGroup::mount(
            items(&["Nils Frahm", "Agnes Obel", "Joke"]),
            Config::new("Entertainment"),
        )
        .unwrap();
        group.activate(1);
        let html = Html::parse_fragment(&group.update().to_html());

        let list = Selector::parse("[role=tablist]").unwrap();
        assert_eq!(
            html.select(&list).next().unwrap().value().attr("aria-label"),
            Some("Entertainment")
        );

        let selected = Selector::parse("[role=tab][aria-selected=true]").unwrap();
        let selected: Vec<_> = html.select(&selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value().attr("id"), Some("Agnes-Obel"));

        let visible = Selector::parse("[role=tabpanel]:not([hidden])").unwrap();
        let visible: Vec<_> = html.select(&visible).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].value().attr("id"), Some("Agnes-Obel-tab"));
        assert_eq!(visible[0].value().attr("aria-labelledby"), Some("Agnes-Obel"));
    }

    #[test]
    fn test_blank_label_rejected() {
        let result = TabGroup::mount(items(&["A"]), Config::new(" "));
        assert!(matches!(result, Err(crate::CoreError::Config(_))));
    }

    #[test]
    fn test_navigate_schedules_focus() {
        let mut group = abcd();
        assert_eq!(group.navigate(NavigationIntent::Previous), Some(3));
        group.update();
        assert_eq!(group.focused_id().as_deref(), Some("Tab-D"));
    }

    #[test]
    fn test_listener_redirect_settles() {
        let mut group = abcd();
        let inner = group.controller().clone();
        let redirect = group.controller().subscribe(move |change| {
            if change.current == 3 {
                inner.activate(0);
            }
        });

        let mut end = KeyEvent::new("End");
        assert_eq!(group.on_key_down(&mut end), Some(3));
        assert_eq!(group.active_index(), 0);

        let tree = group.update().clone();
        assert_eq!(tab_stop_and_visible(&tree), (vec![0], vec![0]));
        assert_eq!(group.focused_id().as_deref(), Some("Tab-A"));

        assert!(group.controller().unsubscribe(redirect));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_empty_mount_is_inert_in_release() {
        let mut group = TabGroup::mount(Vec::new(), Config::default()).unwrap();
        assert!(group.is_empty());

        let mut end = KeyEvent::new("End");
        assert_eq!(group.on_key_down(&mut end), None);
        assert!(!end.is_default_prevented());
        assert_eq!(group.on_click("anything"), None);

        let tree = group.update().clone();
        assert!(tree.find_all_by_role("tab").is_empty());
        assert!(tree.find_all_by_role("tabpanel").is_empty());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_out_of_range_activate_is_ignored_in_release() {
        let group = abcd();
        assert!(!group.activate(7));
        assert_eq!(group.active_index(), 0);
        assert_eq!(group.pending_focus(), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without items")]
    fn test_empty_mount_asserts_in_debug() {
        let _ = TabGroup::mount(Vec::new(), Config::default());
    }
}
