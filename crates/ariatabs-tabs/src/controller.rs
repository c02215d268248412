//! Tab Group Controller
//!
//! The only writer of the active index. Renderers read it through
//! [`TabGroupController::state`] and learn about changes by subscribing.

use parking_lot::{Mutex, MutexGuard, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

use ariatabs_navigation::{KeyEvent, KeyResolver, NavigationIntent};

use crate::error::TabError;
use crate::state::TabGroupState;
use crate::Result;

/// What caused an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationSource {
    /// Arrow, Home or End on the tab list
    Keyboard,
    /// Click on a tab control
    Pointer,
    /// Host code calling `activate`
    Programmatic,
}

impl ActivationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationSource::Keyboard => "keyboard",
            ActivationSource::Pointer => "pointer",
            ActivationSource::Programmatic => "programmatic",
        }
    }
}

impl std::fmt::Display for ActivationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Published after every real change of the active index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChange {
    pub previous: usize,
    pub current: usize,
    pub source: ActivationSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ActiveChange) + Send>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
    /// Changes raised while a delivery round is running
    queue: VecDeque<ActiveChange>,
    publishing: bool,
    /// Entries taken out for the running delivery round
    in_flight: Vec<SubscriptionId>,
    /// In-flight entries unsubscribed during delivery
    removed: Vec<SubscriptionId>,
}

pub struct TabGroupController {
    /// Active index and item count
    state: Arc<RwLock<TabGroupState>>,
    /// Key policy for this group's orientation and direction
    resolver: KeyResolver,
    /// Change listeners. Callbacks run unlocked and may activate, subscribe
    /// or unsubscribe; nested changes are delivered after the current one.
    subscribers: Arc<Mutex<Subscribers>>,
}

impl TabGroupController {
    pub fn new(item_count: usize, resolver: KeyResolver) -> Self {
        Self {
            state: Arc::new(RwLock::new(TabGroupState::new(item_count))),
            resolver,
            subscribers: Arc::new(Mutex::new(Subscribers::default())),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> TabGroupState {
        *self.state.read()
    }

    pub fn active_index(&self) -> usize {
        self.state.read().active_index()
    }

    pub fn item_count(&self) -> usize {
        self.state.read().item_count()
    }

    pub fn resolver(&self) -> KeyResolver {
        self.resolver
    }

    /// Activate a tab from host code.
    ///
    /// `index` must be in range; anything else is a caller bug and panics in
    /// debug builds. Release builds log and ignore it.
    pub fn activate(&self, index: usize) -> bool {
        self.activate_from(index, ActivationSource::Programmatic)
    }

    /// Activate a tab, recording what caused it. Returns true if the active
    /// index changed.
    pub fn activate_from(&self, index: usize, source: ActivationSource) -> bool {
        let count = self.item_count();
        debug_assert!(
            index < count,
            "activate({index}) out of range for {count} tabs"
        );

        match self.try_activate_from(index, source) {
            Ok(changed) => changed,
            Err(e) => {
                tracing::warn!(index, count, source = %source, "Ignoring activation: {}", e);
                false
            }
        }
    }

    /// Checked activation for callers that can't guarantee the index
    pub fn try_activate(&self, index: usize) -> Result<bool> {
        self.try_activate_from(index, ActivationSource::Programmatic)
    }

    fn try_activate_from(&self, index: usize, source: ActivationSource) -> Result<bool> {
        let previous = {
            let mut state = self.state.write();
            if !state.contains(index) {
                return Err(TabError::IndexOutOfRange {
                    index,
                    count: state.item_count(),
                });
            }
            state.set_active(index)
        };

        let Some(previous) = previous else {
            return Ok(false);
        };

        tracing::debug!(
            from = previous,
            to = index,
            source = %source,
            "Active tab transition"
        );

        self.publish(ActiveChange {
            previous,
            current: index,
            source,
        });

        Ok(true)
    }

    /// Interpret a keydown on the tab list.
    ///
    /// Handled keys have their default action suppressed and activate the
    /// resulting tab, which is returned. Other keys are left untouched.
    pub fn handle_key(&self, event: &mut KeyEvent) -> Option<usize> {
        let Some(intent) = self.resolver.resolve(event.key()) else {
            tracing::trace!(key = %event.key(), "Key passed through");
            return None;
        };

        let target = self.navigate(intent)?;
        event.prevent_default();
        Some(target)
    }

    /// Apply a navigation intent as if it came from the keyboard
    pub fn navigate(&self, intent: NavigationIntent) -> Option<usize> {
        let state = self.state();
        let target = intent.apply(state.active_index(), state.item_count())?;

        self.activate_from(target, ActivationSource::Keyboard);
        Some(target)
    }

    /// Register a listener for active-index changes
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ActiveChange) + Send + 'static,
    {
        let mut subscribers = self.subscribers.lock();
        let id = SubscriptionId(subscribers.next_id);
        subscribers.next_id += 1;
        subscribers.entries.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.entries.len();
        subscribers.entries.retain(|(entry_id, _)| *entry_id != id);
        if subscribers.entries.len() != before {
            return true;
        }

        match subscribers.in_flight.iter().position(|entry_id| *entry_id == id) {
            Some(pos) => {
                subscribers.in_flight.remove(pos);
                subscribers.removed.push(id);
                true
            }
            None => false,
        }
    }

    fn publish(&self, change: ActiveChange) {
        let mut subscribers = self.subscribers.lock();
        subscribers.queue.push_back(change);
        if subscribers.publishing {
            // Raised from inside a callback; the running round delivers it next
            return;
        }
        subscribers.publishing = true;

        while let Some(change) = subscribers.queue.pop_front() {
            let mut running = std::mem::take(&mut subscribers.entries);
            subscribers.in_flight = running.iter().map(|(id, _)| *id).collect();

            MutexGuard::unlocked(&mut subscribers, || {
                for (_, callback) in running.iter_mut() {
                    callback(&change);
                }
            });

            let removed = std::mem::take(&mut subscribers.removed);
            running.retain(|(id, _)| !removed.contains(id));
            running.append(&mut subscribers.entries);
            subscribers.entries = running;
            subscribers.in_flight.clear();
        }

        subscribers.publishing = false;
    }
}

impl Clone for TabGroupController {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            resolver: self.resolver,
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
