use crate::config::Config;
use crate::eventbus::{EventBus, EventFilter};
use crate::filtered_listener::FilteredListener;
use crate::logger::Logger;
use crate::queue::EventQueue;
use crate::source::EventSource;
use crate::Event;

/// Owns the event sources and the listener bus, and drives one
/// pump / poll / dispatch step at a time.
///
/// Every manager starts with an [`EventQueue`] as its first source; producers
/// push into it through [`queue`](EventManager::queue).
pub struct EventManager {
    queue: EventQueue,
    sources: Vec<Box<dyn EventSource>>,
    bus: EventBus,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let queue = EventQueue::with_capacity(config.queue_capacity);
        let mut manager = Self {
            queue: queue.clone(),
            sources: vec![Box::new(queue)],
            bus: EventBus::new(),
        };

        let logging = &config.logging;
        if logging.enabled {
            let logger = Logger::from_config(logging);
            if logging.categories.is_empty() {
                manager.bus.add_listener(logger, EventFilter::All);
            } else {
                manager.bus.add_listener(
                    FilteredListener::categories(logging.categories.clone(), logger),
                    EventFilter::All,
                );
            }
            tracing::debug!(
                format = ?logging.format,
                level = ?logging.level,
                categories = logging.categories.len(),
                "event logging enabled"
            );
        }

        manager
    }

    /// Handle to the built-in queue.
    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    pub fn add_source<S: EventSource + 'static>(&mut self, source: S) {
        tracing::debug!(source = source.name(), "event source added");
        self.sources.push(Box::new(source));
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn pump(&mut self) {
        for source in self.sources.iter_mut() {
            source.pump();
        }
    }

    /// Drains every source, in the order the sources were added.
    pub fn poll_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        for source in self.sources.iter_mut() {
            events.extend(source.drain());
        }
        events
    }

    pub fn dispatch(&mut self, events: &[Event]) {
        #[cfg(feature = "debug-log")]
        for event in events {
            tracing::trace!(
                category = %event.category(),
                event_type = event.raw_type(),
                "dispatching event"
            );
        }
        self.bus.emit_all(events);
    }

    /// Pump, poll and dispatch once. Returns the events that were dispatched.
    pub fn run_once(&mut self) -> Vec<Event> {
        self.pump();
        let events = self.poll_events();
        if !events.is_empty() {
            tracing::trace!(count = events.len(), "polled events");
        }
        self.dispatch(&events);
        events
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("sources", &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>())
            .field("bus", &self.bus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::VirtualSource;
    use crate::category::Category;
    use crate::codes::{Keycode, Scancode};
    use crate::config::LogFormat;
    use std::sync::{Arc, Mutex};

    #[test]
    fn polls_queue_then_sources_in_order() {
        let mut manager = EventManager::new();
        let mut a = VirtualSource::new("a");
        let mut b = VirtualSource::new("b");
        a.feed(Event::quit(10));
        b.feed(Event::quit(20));
        manager.add_source(a);
        manager.add_source(b);
        manager.queue().push(Event::quit(30)).unwrap();

        let stamps: Vec<_> = manager.run_once().iter().map(Event::timestamp).collect();
        assert_eq!(stamps, vec![30, 10, 20]);
        assert!(manager.run_once().is_empty());
        assert_eq!(manager.source_count(), 3);
    }

    #[test]
    fn nothing_is_polled_from_virtual_sources_without_pump() {
        let mut manager = EventManager::new();
        let mut src = VirtualSource::new("v");
        src.quit();
        manager.add_source(src);
        assert!(manager.poll_events().is_empty());
        manager.pump();
        assert_eq!(manager.poll_events().len(), 1);
    }

    #[test]
    fn run_once_dispatches_to_listeners() {
        let mut manager = EventManager::new();
        let keys: Arc<Mutex<usize>> = Default::default();
        let counter = Arc::clone(&keys);
        manager.bus_mut().add_listener(
            move |_: &Event| *counter.lock().unwrap() += 1,
            EventFilter::Category(Category::Keyboard),
        );

        let mut src = VirtualSource::new("v");
        src.press_key(Scancode::A, Keycode::A);
        src.release_key(Scancode::A, Keycode::A);
        src.quit();
        manager.add_source(src);

        assert_eq!(manager.run_once().len(), 3);
        assert_eq!(*keys.lock().unwrap(), 2);
    }

    #[test]
    fn config_controls_queue_and_logger() {
        let mut config = Config::default();
        config.queue_capacity = 1;
        config.logging.enabled = true;
        config.logging.format = LogFormat::Json;
        config.logging.categories = vec![Category::Keyboard];

        let mut manager = EventManager::from_config(&config);
        assert_eq!(manager.queue().capacity(), 1);
        assert_eq!(manager.bus().len(), 1);

        manager.queue().push(Event::quit(1)).unwrap();
        assert!(manager.queue().push(Event::quit(2)).is_err());
        assert_eq!(manager.run_once().len(), 1);

        assert!(EventManager::new().bus().is_empty());
    }
}
