//! In-process event queue.
//!
//! [`EventQueue`] is a bounded FIFO shared between producers and the thread that
//! consumes events. Handles are cheap to clone; every clone sees the same queue.
//!
//! # Semantics
//! - `push` runs the admission filter first. A rejected event is dropped silently
//!   and `push` returns `Ok(false)`.
//! - A full queue rejects new events with [`Error::QueueFull`]; nothing is evicted.
//! - Watchers added with [`EventQueue::add_watch`] see every admitted event, in the
//!   order they were added, after it is queued.
//! - The filter and the watchers run without the queue lock held, so they may call
//!   back into the queue.
//! - `poll` never blocks; `wait` and `wait_timeout` block on a condition variable.
//! - `flush*` and `has_event*` match on raw discriminants, so user and unknown
//!   types work the same as named ones.

use crate::error::{Error, Result};
use crate::event_type::EventTag;
use crate::source::EventSource;
use crate::Event;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Default capacity, matching the platform's queue depth.
pub const DEFAULT_QUEUE_CAPACITY: usize = 65_535;

/// Admission predicate: return `false` to drop the event.
pub type EventFilterFn = Arc<dyn Fn(&Event) -> bool + Send + Sync>;

/// Callback run for every event that enters the queue.
pub type EventWatchFn = Arc<dyn Fn(&Event) + Send + Sync>;

/// Handle returned by [`EventQueue::add_watch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

struct State {
    events: VecDeque<Event>,
    capacity: usize,
    filter: Option<EventFilterFn>,
    watches: Vec<(WatchId, EventWatchFn)>,
    next_watch: u64,
}

struct Shared {
    state: Mutex<State>,
    ready: Condvar,
}

#[derive(Clone)]
pub struct EventQueue {
    shared: Arc<Shared>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }
}

impl fmt::Debug for EventQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("EventQueue")
            .field("len", &state.events.len())
            .field("capacity", &state.capacity)
            .field("filtered", &state.filter.is_some())
            .field("watches", &state.watches.len())
            .finish()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue holding at most `capacity` events (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    events: VecDeque::new(),
                    capacity,
                    filter: None,
                    watches: Vec::new(),
                    next_watch: 0,
                }),
                ready: Condvar::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // Nothing in State can be left half-updated, so a poisoned lock is still usable.
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Enqueues `event`. Returns `Ok(false)` if the admission filter dropped it.
    ///
    /// Watchers run after the event is queued, on the pushing thread.
    ///
    /// # Errors
    /// [`Error::QueueFull`] when the queue is at capacity.
    pub fn push(&self, event: Event) -> Result<bool> {
        let filter = self.lock().filter.clone();
        if let Some(filter) = filter {
            if !filter(&event) {
                tracing::trace!(event_type = event.raw_type(), "event rejected by queue filter");
                return Ok(false);
            }
        }

        let mut state = self.lock();
        if state.events.len() >= state.capacity {
            tracing::warn!(capacity = state.capacity, "event queue full, dropping event");
            return Err(Error::QueueFull {
                capacity: state.capacity,
            });
        }

        let watches: Vec<EventWatchFn> = state.watches.iter().map(|(_, w)| Arc::clone(w)).collect();
        if watches.is_empty() {
            state.events.push_back(event);
            drop(state);
            self.shared.ready.notify_one();
            return Ok(true);
        }

        state.events.push_back(event.clone());
        drop(state);
        self.shared.ready.notify_one();
        for watch in &watches {
            watch(&event);
        }
        Ok(true)
    }

    /// Dequeues the oldest event without blocking.
    pub fn poll(&self) -> Option<Event> {
        self.lock().events.pop_front()
    }

    /// Blocks until an event is available.
    pub fn wait(&self) -> Event {
        let mut state = self.lock();
        loop {
            if let Some(event) = state.events.pop_front() {
                return event;
            }
            state = self
                .shared
                .ready
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Blocks up to `timeout` for an event.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Event> {
        let state = self.lock();
        let (mut state, _) = self
            .shared
            .ready
            .wait_timeout_while(state, timeout, |s| s.events.is_empty())
            .unwrap_or_else(PoisonError::into_inner);
        state.events.pop_front()
    }

    /// Removes every queued event of type `tag`. Returns how many were removed.
    pub fn flush(&self, tag: impl EventTag) -> usize {
        let raw = tag.raw_type();
        self.retain(|e| e.raw_type() != raw)
    }

    /// Removes every queued event with `min <= type <= max`.
    pub fn flush_range(&self, min: impl EventTag, max: impl EventTag) -> usize {
        let (min, max) = (min.raw_type(), max.raw_type());
        self.retain(|e| !(min..=max).contains(&e.raw_type()))
    }

    pub fn has_event(&self, tag: impl EventTag) -> bool {
        let raw = tag.raw_type();
        self.lock().events.iter().any(|e| e.raw_type() == raw)
    }

    pub fn has_events(&self, min: impl EventTag, max: impl EventTag) -> bool {
        let range = min.raw_type()..=max.raw_type();
        self.lock()
            .events
            .iter()
            .any(|e| range.contains(&e.raw_type()))
    }

    /// Installs an admission filter, replacing any previous one.
    ///
    /// Events already queued are kept.
    pub fn set_filter(&self, filter: impl Fn(&Event) -> bool + Send + Sync + 'static) {
        self.lock().filter = Some(Arc::new(filter));
    }

    pub fn clear_filter(&self) {
        self.lock().filter = None;
    }

    /// Registers a watcher called with every event admitted from now on.
    pub fn add_watch(&self, watch: impl Fn(&Event) + Send + Sync + 'static) -> WatchId {
        let mut state = self.lock();
        let id = WatchId(state.next_watch);
        state.next_watch += 1;
        state.watches.push((id, Arc::new(watch)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_watch(&self, id: WatchId) -> bool {
        let mut state = self.lock();
        let before = state.watches.len();
        state.watches.retain(|(w, _)| *w != id);
        state.watches.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    fn retain(&self, keep: impl Fn(&Event) -> bool) -> usize {
        let mut state = self.lock();
        let before = state.events.len();
        state.events.retain(|e| keep(e));
        before - state.events.len()
    }
}

impl EventSource for EventQueue {
    fn name(&self) -> &str {
        "queue"
    }

    fn poll(&mut self) -> Option<Event> {
        EventQueue::poll(self)
    }
}
