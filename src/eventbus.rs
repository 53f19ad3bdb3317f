use crate::category::Category;
use crate::Event;
use std::collections::BTreeMap;

/// Trait for reacting to events delivered by an [`EventBus`].
pub trait EventListener: Send {
    fn on_event(&mut self, event: &Event);
}

impl<F> EventListener for F
where
    F: FnMut(&Event) + Send,
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}

/// Handle returned by [`EventBus::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Determines which events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    Category(Category),
    InputOnly,
    DeviceOnly,
    Custom(fn(&Event) -> bool),
}

impl EventFilter {
    pub fn accepts(&self, event: &Event) -> bool {
        match *self {
            EventFilter::All => true,
            EventFilter::Category(category) => event.category() == category,
            EventFilter::InputOnly => event.is_input(),
            EventFilter::DeviceOnly => event.is_device(),
            EventFilter::Custom(f) => f(event),
        }
    }
}

struct ListenerEntry {
    listener: Box<dyn EventListener>,
    enabled: bool,
    filter: EventFilter,
}

/// Fan-out of events to registered listeners.
///
/// Listeners are called in registration order.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    listeners: BTreeMap<ListenerId, ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener behind `filter`. New listeners start enabled.
    pub fn add_listener(
        &mut self,
        listener: impl EventListener + 'static,
        filter: EventFilter,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        tracing::debug!(id = id.0, ?filter, "listener added");
        id
    }

    pub fn enable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Mutes a listener without removing it.
    pub fn disable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn emit(&mut self, event: &Event) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.filter.accepts(event) {
                entry.listener.on_event(event);
            }
        }
    }

    pub fn emit_all(&mut self, events: &[Event]) {
        for event in events {
            self.emit(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{AudioDeviceEvent, AudioDeviceKind, KeyboardEvent, UserEvent};
    use crate::codes::{Keycode, Scancode};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<u32>>>;

    fn recorder(seen: &Seen) -> impl EventListener + 'static {
        let seen = Arc::clone(seen);
        move |e: &Event| seen.lock().unwrap().push(e.raw_type())
    }

    fn sample() -> Vec<Event> {
        vec![
            Event::quit(1),
            Event::new(2, KeyboardEvent::new(Scancode::A, Keycode::A, true)),
            Event::new(
                3,
                AudioDeviceEvent {
                    kind: AudioDeviceKind::Added,
                    which: 7,
                    recording: false,
                },
            ),
            Event::new(4, UserEvent::new(0x8002).unwrap()),
        ]
    }

    #[test]
    fn filters_select_events() {
        let mut bus = EventBus::new();
        let all: Seen = Default::default();
        let input: Seen = Default::default();
        let device: Seen = Default::default();
        let user: Seen = Default::default();
        let custom: Seen = Default::default();

        bus.add_listener(recorder(&all), EventFilter::All);
        bus.add_listener(recorder(&input), EventFilter::InputOnly);
        bus.add_listener(recorder(&device), EventFilter::DeviceOnly);
        bus.add_listener(recorder(&user), EventFilter::Category(Category::User));
        bus.add_listener(recorder(&custom), EventFilter::Custom(|e| e.timestamp() > 2));
        assert_eq!(bus.len(), 5);

        bus.emit_all(&sample());

        assert_eq!(*all.lock().unwrap(), vec![0x100, 0x300, 0x1100, 0x8002]);
        assert_eq!(*input.lock().unwrap(), vec![0x300]);
        assert_eq!(*device.lock().unwrap(), vec![0x1100]);
        assert_eq!(*user.lock().unwrap(), vec![0x8002]);
        assert_eq!(*custom.lock().unwrap(), vec![0x1100, 0x8002]);
    }

    #[test]
    fn disable_enable_remove() {
        let mut bus = EventBus::new();
        let seen: Seen = Default::default();
        let id = bus.add_listener(recorder(&seen), EventFilter::All);

        bus.disable(id);
        bus.emit(&Event::quit(1));
        assert!(seen.lock().unwrap().is_empty());

        bus.enable(id);
        bus.emit(&Event::quit(2));
        assert_eq!(seen.lock().unwrap().len(), 1);

        assert!(bus.remove_listener(id));
        assert!(!bus.remove_listener(id));
        bus.emit(&Event::quit(3));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut bus = EventBus::new();
        let order: Arc<Mutex<Vec<&'static str>>> = Default::default();
        for name in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            bus.add_listener(move |_: &Event| order.lock().unwrap().push(name), EventFilter::All);
        }
        bus.emit(&Event::quit(0));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }
}
