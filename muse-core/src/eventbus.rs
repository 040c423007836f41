use std::{any::Any, collections::HashMap, sync::Arc};

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::selector::Selector;

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;
type WildcardHandler = Arc<dyn Fn(&'static str) + Send + Sync>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

struct Registration {
    id: SubscriptionId,
    // Always a `Handler<T>` for the `T` of the selector it is filed under.
    handler: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
struct Registry {
    last_id: u64,
    handlers: HashMap<&'static str, Vec<Registration>>,
    wildcard: Vec<(SubscriptionId, WildcardHandler)>,
}

impl Registry {
    fn next_id(&mut self) -> SubscriptionId {
        self.last_id += 1;
        SubscriptionId(self.last_id)
    }
}

/// Synchronous publish/subscribe channel for UI events.
///
/// `publish` calls every handler registered for the event, in registration
/// order, before returning. Nothing is buffered: publishing an event nobody
/// listens to is a no-op. The registry lock is released before handlers run,
/// so handlers are free to subscribe, unsubscribe or publish themselves. Such
/// changes take effect from the next `publish` on; a dispatch already in flight
/// works on the handler list captured when it started.
#[derive(Default)]
pub struct EventBus {
    registry: Mutex<Registry>,
}

static GLOBAL_EVENTBUS: OnceCell<EventBus> = OnceCell::new();

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide bus shared by all components.
    pub fn global() -> &'static EventBus {
        GLOBAL_EVENTBUS.get_or_init(EventBus::new)
    }

    pub fn subscribe<T: 'static>(
        &self,
        selector: Selector<T>,
        handler: impl Fn(&T) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let handler: Handler<T> = Arc::new(handler);
        let mut registry = self.registry.lock();
        let id = registry.next_id();
        registry
            .handlers
            .entry(selector.name())
            .or_default()
            .push(Registration {
                id,
                handler: Box::new(handler),
            });
        log::debug!("subscribed {:?} to {}", id, selector);
        id
    }

    /// Registers a handler that is called with the event name after the typed
    /// handlers of every published event.
    pub fn subscribe_all(
        &self,
        handler: impl Fn(&'static str) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut registry = self.registry.lock();
        let id = registry.next_id();
        registry.wildcard.push((id, Arc::new(handler)));
        id
    }

    /// Returns `false` if `id` wasn't subscribed to `selector`.
    pub fn unsubscribe<T>(&self, selector: Selector<T>, id: SubscriptionId) -> bool {
        let mut registry = self.registry.lock();
        let Some(registrations) = registry.handlers.get_mut(selector.name()) else {
            return false;
        };
        let before = registrations.len();
        registrations.retain(|registration| registration.id != id);
        let removed = registrations.len() != before;
        if registrations.is_empty() {
            registry.handlers.remove(selector.name());
        }
        removed
    }

    pub fn unsubscribe_any(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.lock();
        let before = registry.wildcard.len();
        registry.wildcard.retain(|(wildcard_id, _)| *wildcard_id != id);
        registry.wildcard.len() != before
    }

    /// Drops every handler of `selector`, returning how many there were.
    pub fn unsubscribe_all<T>(&self, selector: Selector<T>) -> usize {
        self.registry
            .lock()
            .handlers
            .remove(selector.name())
            .map_or(0, |registrations| registrations.len())
    }

    pub fn clear(&self) {
        let mut registry = self.registry.lock();
        registry.handlers.clear();
        registry.wildcard.clear();
    }

    pub fn handler_count<T>(&self, selector: Selector<T>) -> usize {
        self.registry
            .lock()
            .handlers
            .get(selector.name())
            .map_or(0, Vec::len)
    }

    pub fn publish<T: 'static>(&self, selector: Selector<T>, payload: &T) {
        let (handlers, wildcard) = self.snapshot(selector);
        if handlers.is_empty() && wildcard.is_empty() {
            log::trace!("no subscribers for {}", selector);
            return;
        }
        log::debug!("dispatching {} to {} handlers", selector, handlers.len());
        for handler in &handlers {
            handler(payload);
        }
        for handler in &wildcard {
            handler(selector.name());
        }
    }

    /// Publishes an event that carries no payload.
    pub fn notify(&self, selector: Selector) {
        self.publish(selector, &());
    }

    fn snapshot<T: 'static>(
        &self,
        selector: Selector<T>,
    ) -> (Vec<Handler<T>>, Vec<WildcardHandler>) {
        let registry = self.registry.lock();
        let handlers = registry
            .handlers
            .get(selector.name())
            .map(|registrations| {
                registrations
                    .iter()
                    .filter_map(|registration| {
                        let handler = registration.handler.downcast_ref::<Handler<T>>();
                        debug_assert!(handler.is_some(), "payload type mismatch");
                        handler.cloned()
                    })
                    .collect()
            })
            .unwrap_or_default();
        let wildcard = registry
            .wildcard
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        (handlers, wildcard)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::cmd::{self, CreatePlaylistEvent, MergeGenreDialogEvent};

    #[test]
    fn clear_selection_reaches_handler_once() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        bus.subscribe(cmd::CLEAR_SELECTION, {
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        });
        bus.notify(cmd::CLEAR_SELECTION);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::new();
        bus.publish(cmd::CREATE_PLAYLIST, &CreatePlaylistEvent::default());
        bus.notify(cmd::MOBILE_SIDEBAR_OPEN);
        assert_eq!(bus.handler_count(cmd::CREATE_PLAYLIST), 0);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for n in 0..4 {
            let seen = seen.clone();
            bus.subscribe(cmd::MERGE_GENRE_DIALOG, move |event: &MergeGenreDialogEvent| {
                seen.lock().push((n, event.genre_ids.len()));
            });
        }
        bus.publish(
            cmd::MERGE_GENRE_DIALOG,
            &MergeGenreDialogEvent {
                genre_ids: vec!["1".into(), "2".into()],
                genre_names: vec!["Rock".into(), "Pop".into()],
            },
        );
        assert_eq!(*seen.lock(), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn events_only_reach_their_own_subscribers() {
        let bus = EventBus::new();
        let toggles = Arc::new(AtomicUsize::new(0));
        bus.subscribe(cmd::HOMESCREEN_EDIT_TOGGLE, {
            let toggles = toggles.clone();
            move |_| {
                toggles.fetch_add(1, Ordering::SeqCst);
            }
        });
        bus.notify(cmd::MOBILE_SIDEBAR_OPEN);
        bus.notify(cmd::CLEAR_SELECTION);
        assert_eq!(toggles.load(Ordering::SeqCst), 0);
        bus.notify(cmd::HOMESCREEN_EDIT_TOGGLE);
        assert_eq!(toggles.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let id = bus.subscribe(cmd::CLEAR_SELECTION, {
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert!(bus.unsubscribe(cmd::CLEAR_SELECTION, id));
        assert!(!bus.unsubscribe(cmd::CLEAR_SELECTION, id));
        bus.notify(cmd::CLEAR_SELECTION);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(bus.handler_count(cmd::CLEAR_SELECTION), 0);
    }

    #[test]
    fn unsubscribe_needs_matching_selector() {
        let bus = EventBus::new();
        let id = bus.subscribe(cmd::CLEAR_SELECTION, |_| {});
        assert!(!bus.unsubscribe(cmd::MOBILE_SIDEBAR_OPEN, id));
        assert_eq!(bus.handler_count(cmd::CLEAR_SELECTION), 1);
    }

    #[test]
    fn unsubscribing_during_dispatch_does_not_panic() {
        let bus = Arc::new(EventBus::new());
        let later_calls = Arc::new(AtomicUsize::new(0));
        let later_id = Arc::new(Mutex::new(None));

        bus.subscribe(cmd::CLEAR_SELECTION, {
            let bus = bus.clone();
            let later_id = later_id.clone();
            move |_| {
                if let Some(id) = later_id.lock().take() {
                    bus.unsubscribe(cmd::CLEAR_SELECTION, id);
                }
            }
        });
        let id = bus.subscribe(cmd::CLEAR_SELECTION, {
            let later_calls = later_calls.clone();
            move |_| {
                later_calls.fetch_add(1, Ordering::SeqCst);
            }
        });
        *later_id.lock() = Some(id);

        bus.notify(cmd::CLEAR_SELECTION);
        bus.notify(cmd::CLEAR_SELECTION);

        // The first dispatch had already captured the second handler.
        assert_eq!(later_calls.load(Ordering::SeqCst), 1);
        assert_eq!(bus.handler_count(cmd::CLEAR_SELECTION), 1);
    }

    #[test]
    fn handlers_may_publish() {
        let bus = Arc::new(EventBus::new());
        let cleared = Arc::new(AtomicUsize::new(0));
        bus.subscribe(cmd::CREATE_PLAYLIST, {
            let bus = bus.clone();
            move |_| bus.notify(cmd::CLEAR_SELECTION)
        });
        bus.subscribe(cmd::CLEAR_SELECTION, {
            let cleared = cleared.clone();
            move |_| {
                cleared.fetch_add(1, Ordering::SeqCst);
            }
        });
        bus.publish(cmd::CREATE_PLAYLIST, &CreatePlaylistEvent::default());
        assert_eq!(cleared.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn wildcard_sees_every_event_name() {
        let bus = EventBus::new();
        let names = Arc::new(Mutex::new(Vec::new()));
        let id = bus.subscribe_all({
            let names = names.clone();
            move |name| names.lock().push(name)
        });
        bus.notify(cmd::CLEAR_SELECTION);
        bus.publish(cmd::CREATE_PLAYLIST, &CreatePlaylistEvent::default());
        assert!(bus.unsubscribe_any(id));
        bus.notify(cmd::MOBILE_SIDEBAR_OPEN);
        assert_eq!(*names.lock(), vec!["clearSelection", "createPlaylist"]);
    }

    #[test]
    fn unsubscribe_all_and_clear() {
        let bus = EventBus::new();
        bus.subscribe(cmd::CLEAR_SELECTION, |_| {});
        bus.subscribe(cmd::CLEAR_SELECTION, |_| {});
        bus.subscribe(cmd::HOMESCREEN_EDIT_TOGGLE, |_| {});
        assert_eq!(bus.unsubscribe_all(cmd::CLEAR_SELECTION), 2);
        assert_eq!(bus.unsubscribe_all(cmd::CLEAR_SELECTION), 0);
        assert_eq!(bus.handler_count(cmd::HOMESCREEN_EDIT_TOGGLE), 1);
        bus.clear();
        assert_eq!(bus.handler_count(cmd::HOMESCREEN_EDIT_TOGGLE), 0);
    }

    #[test]
    fn global_bus_is_shared() {
        assert!(std::ptr::eq(EventBus::global(), EventBus::global()));
    }
}
