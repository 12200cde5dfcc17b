use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

/// Subscriber callback, invoked with a borrowed event payload
pub type Callback<P> = Box<dyn FnMut(&P)>;

/// Narrow interface to the host's native event source
///
/// [`EventRegistry::bind_hooks`] installs one hook per subscribed event
/// name; the host is then expected to call [`EventRegistry::dispatch`] with
/// that name, once per occurring event.
pub trait EventHost {
    /// Install a hook for the named event
    fn install_hook(&mut self, event: &str);
}

/// Registry of event subscribers, keyed by event name
///
/// Decouples event producers (host lifecycle ticks) from consumers (feature
/// code) without consumers needing to know about each other. Subscribers for
/// a name fire in registration order and are never deduplicated: the same
/// callback registered twice fires twice.
///
/// Dispatching a name nobody ever subscribed to is a soft failure: one
/// warning in the log, zero invocations, no panic. The host keeps running.
pub struct EventRegistry<P> {
    /// Map of event name to ordered subscriber list
    subscribers: HashMap<String, Vec<Callback<P>>>,
    /// Names that already have a host hook installed
    hooked: HashSet<String>,
}

impl<P> EventRegistry<P> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
            hooked: HashSet::new(),
        }
    }

    /// Append a subscriber for the named event
    ///
    /// The dispatch entry point for `event` is created on first
    /// subscription; an entry point exists for a name iff at least one
    /// subscriber has ever been added for it.
    pub fn subscribe(&mut self, event: impl Into<String>, callback: impl FnMut(&P) + 'static) {
        let event = event.into();
        debug!(target: "events", "Subscribing to event: {}", event);
        self.subscribers
            .entry(event)
            .or_default()
            .push(Box::new(callback));
    }

    /// Invoke every subscriber for the named event, in registration order
    ///
    /// Returns whether a dispatch entry point existed for `event`. Unknown
    /// names degrade to a logged warning with no invocation.
    pub fn dispatch(&mut self, event: &str, payload: &P) -> bool {
        let Some(list) = self.subscribers.get_mut(event) else {
            warn!(target: "events", "No such event: {}", event);
            return false;
        };

        for callback in list.iter_mut() {
            callback(payload);
        }

        true
    }

    /// Whether a dispatch entry point exists for the named event
    pub fn has_event(&self, event: &str) -> bool {
        self.subscribers.contains_key(event)
    }

    /// Number of subscribers for the named event
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.get(event).map_or(0, Vec::len)
    }

    /// Names of all events with a dispatch entry point
    pub fn event_names(&self) -> Vec<&str> {
        self.subscribers.keys().map(String::as_str).collect()
    }

    /// Install one host hook per subscribed event name
    ///
    /// Idempotent: names hooked by an earlier call are skipped, so calling
    /// this again (e.g. after subscribing more events) never double-installs
    /// a hook or double-delivers events.
    pub fn bind_hooks(&mut self, host: &mut dyn EventHost) {
        for event in self.subscribers.keys() {
            if self.hooked.contains(event) {
                continue;
            }

            debug!(target: "events", "Installing host hook: {}", event);
            host.install_hook(event);
            self.hooked.insert(event.clone());
        }
    }
}

impl<P> Default for EventRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
