use crate::Event;

/// Producer of platform events.
///
/// Mirrors the platform's pump/poll protocol: [`pump`](EventSource::pump) gathers
/// pending OS events into the source, [`poll`](EventSource::poll) dequeues one.
pub trait EventSource: Send {
    fn name(&self) -> &str;

    /// Refresh from the underlying producer. Sources without one leave this empty.
    fn pump(&mut self) {}

    /// Next event, or `None` when nothing is ready.
    fn poll(&mut self) -> Option<Event>;

    /// Drains everything currently ready.
    fn drain(&mut self) -> Vec<Event> {
        std::iter::from_fn(|| self.poll()).collect()
    }
}
