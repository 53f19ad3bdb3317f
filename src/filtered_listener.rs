use crate::category::Category;
use crate::eventbus::EventListener;
use crate::Event;

/// Wraps a listener and forwards only events accepted by a predicate.
///
/// [`EventFilter`](crate::eventbus::EventFilter) selects at most one category; this
/// wrapper handles sets of categories, such as the `logging.categories` list the
/// manager reads from its config, and predicates that capture state.
pub struct FilteredListener {
    predicate: Box<dyn Fn(&Event) -> bool + Send + Sync>,
    inner: Box<dyn EventListener>,
}

impl FilteredListener {
    pub fn new(
        predicate: impl Fn(&Event) -> bool + Send + Sync + 'static,
        inner: impl EventListener + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner: Box::new(inner),
        }
    }

    /// Forwards events whose category is in `categories`.
    pub fn categories(categories: Vec<Category>, inner: impl EventListener + 'static) -> Self {
        Self::new(move |e| categories.contains(&e.category()), inner)
    }
}

impl EventListener for FilteredListener {
    fn on_event(&mut self, event: &Event) {
        if (self.predicate)(event) {
            self.inner.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventbus::{EventBus, EventFilter};
    use crate::event::{ClipboardEvent, UserEvent};
    use std::sync::{Arc, Mutex};

    #[test]
    fn forwards_only_matching_events() {
        let seen: Arc<Mutex<Vec<u64>>> = Default::default();
        let sink = Arc::clone(&seen);
        let wanted = vec![Category::User, Category::Clipboard];

        let listener = FilteredListener::new(
            move |e| wanted.contains(&e.category()),
            move |e: &Event| sink.lock().unwrap().push(e.timestamp()),
        );

        let mut bus = EventBus::new();
        bus.add_listener(listener, EventFilter::All);
        bus.emit_all(&[
            Event::quit(1),
            Event::new(2, ClipboardEvent::default()),
            Event::new(3, UserEvent::new(0x9000).unwrap()),
        ]);

        assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
    }

    #[test]
    fn category_set_selects_input_kinds() {
        use crate::codes::{Keycode, Scancode};
        use crate::event::{KeyboardEvent, MouseWheelEvent};

        let seen: Arc<Mutex<Vec<Category>>> = Default::default();
        let sink = Arc::clone(&seen);
        let mut listener = FilteredListener::categories(
            vec![Category::Keyboard, Category::Mouse],
            move |e: &Event| sink.lock().unwrap().push(e.category()),
        );

        for ev in [
            Event::quit(1),
            Event::new(2, KeyboardEvent::new(Scancode::A, Keycode::A, true)),
            Event::new(3, MouseWheelEvent::default()),
            Event::new(4, ClipboardEvent::default()),
        ] {
            listener.on_event(&ev);
        }

        assert_eq!(*seen.lock().unwrap(), vec![Category::Keyboard, Category::Mouse]);
    }
}
