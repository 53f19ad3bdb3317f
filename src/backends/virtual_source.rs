use crate::event::{
    ApplicationEvent, ApplicationEventKind, KeyboardEvent, MouseButtonEvent, UserEvent,
    WindowEvent, WindowEventKind, WindowId,
};
use crate::codes::{Keycode, MouseButton, Scancode};
use crate::source::EventSource;
use crate::Event;
use std::collections::VecDeque;

/// Scripted event source.
///
/// Events passed to [`feed`](VirtualSource::feed) are staged and only become
/// visible to [`poll`](EventSource::poll) after the next [`pump`](EventSource::pump),
/// the same two-step delivery a platform queue has. Timestamps come from an internal
/// tick counter so fed events are strictly increasing.
#[derive(Debug, Default)]
pub struct VirtualSource {
    name: String,
    staged: Vec<Event>,
    ready: VecDeque<Event>,
    clock: u64,
}

impl VirtualSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Stage a fully built event.
    pub fn feed(&mut self, event: Event) {
        self.clock = self.clock.max(event.timestamp());
        self.staged.push(event);
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    pub fn quit(&mut self) {
        let ts = self.tick();
        self.feed(Event::new(ts, ApplicationEvent::new(ApplicationEventKind::Quit)));
    }

    pub fn press_key(&mut self, scancode: Scancode, key: Keycode) {
        let ts = self.tick();
        self.feed(Event::new(ts, KeyboardEvent::new(scancode, key, true)));
    }

    pub fn release_key(&mut self, scancode: Scancode, key: Keycode) {
        let ts = self.tick();
        self.feed(Event::new(ts, KeyboardEvent::new(scancode, key, false)));
    }

    pub fn click(&mut self, button: MouseButton, x: f32, y: f32) {
        for down in [true, false] {
            let ts = self.tick();
            self.feed(Event::new(
                ts,
                MouseButtonEvent {
                    button: button.as_raw(),
                    down,
                    clicks: 1,
                    x,
                    y,
                    ..Default::default()
                },
            ));
        }
    }

    pub fn resize_window(&mut self, window_id: WindowId, width: i32, height: i32) {
        let ts = self.tick();
        self.feed(Event::new(
            ts,
            WindowEvent::new(WindowEventKind::Resized, window_id, width, height),
        ));
    }

    /// Stage a user event. Ignored when `event_type` is outside the user block.
    pub fn user(&mut self, event_type: u32, code: i32) {
        if let Some(user) = UserEvent::new(event_type) {
            let ts = self.tick();
            self.feed(Event::new(ts, user.with_code(code)));
        }
    }

    /// Events staged but not yet pumped.
    pub fn staged(&self) -> usize {
        self.staged.len()
    }
}

impl EventSource for VirtualSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn pump(&mut self) {
        self.ready.extend(self.staged.drain(..));
    }

    fn poll(&mut self) -> Option<Event> {
        self.ready.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    #[test]
    fn nothing_is_visible_before_pump() {
        let mut src = VirtualSource::new("virtual:0");
        src.quit();
        assert_eq!(src.staged(), 1);
        assert!(src.poll().is_none());
        src.pump();
        assert_eq!(src.staged(), 0);
        assert!(src.poll().is_some());
    }

    #[test]
    fn helpers_produce_increasing_timestamps() {
        let mut src = VirtualSource::new("virtual:0");
        src.press_key(Scancode::SPACE, Keycode::SPACE);
        src.click(MouseButton::Left, 4.0, 5.0);
        src.resize_window(1, 800, 600);
        src.user(0x8000, 3);
        src.user(0x10, 3);
        src.pump();

        let events = src.drain();
        let stamps: Vec<_> = events.iter().map(Event::timestamp).collect();
        assert_eq!(stamps, vec![1, 2, 3, 4, 5]);
        let cats: Vec<_> = events.iter().map(Event::category).collect();
        assert_eq!(
            cats,
            vec![
                Category::Keyboard,
                Category::Mouse,
                Category::Mouse,
                Category::Window,
                Category::User
            ]
        );
    }

    #[test]
    fn fed_timestamps_advance_the_clock() {
        let mut src = VirtualSource::new("virtual:0");
        src.feed(Event::quit(100));
        src.quit();
        src.pump();
        assert_eq!(src.poll().map(|e| e.timestamp()), Some(100));
        assert_eq!(src.poll().map(|e| e.timestamp()), Some(101));
    }
}
