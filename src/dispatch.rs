//! Typed access to events.
//!
//! Four ways to act on an [`Event`], from most to least manual:
//!
//! 1. **Match** on [`Event::payload`]. The payload enum is closed, so the compiler
//!    flags every `match` that misses a variant.
//! 2. **View** one payload type: [`Event::view`] returns `Some(&T)` only when the
//!    active payload is a `T`.
//! 3. **Handle** one or more types: [`Event::handle`] for a single type, or
//!    [`Event::dispatch`] to chain several with [`Dispatch::on`].
//! 4. **Visit**: [`Event::visit`] calls the one [`EventVisitor`] method that matches
//!    the active payload.
//!
//! None of these can fail in any way other than "not this type". Unknown
//! discriminants reach [`EventVisitor::visit_unknown`] and never match a view.
//!
//! The fields every event shares are not a view: read them from any event with
//! [`Event::common`], or [`Event::timestamp`] and [`Event::raw_type`].
//!
//! ```
//! use evdispatch::{Event, KeyboardEvent, Keycode, Scancode, WindowEvent};
//!
//! let ev = Event::new(1, KeyboardEvent::new(Scancode::ESCAPE, Keycode::ESCAPE, true));
//! let mut quit = false;
//! let handled = ev
//!     .dispatch()
//!     .on(|w: &WindowEvent| println!("window {}", w.window_id))
//!     .on(|k: &KeyboardEvent| quit = k.scancode == Scancode::ESCAPE)
//!     .handled();
//! assert!(handled && quit);
//! ```

use crate::event::*;

/// A payload type that can be viewed out of an [`EventPayload`].
pub trait EventView: Payload + Sized {
    /// `Some` when `payload` holds a `Self`.
    fn view(payload: &EventPayload) -> Option<&Self>;
}

macro_rules! event_views {
    ($( $variant:ident => $ty:ident ),+ $(,)?) => {
        $(
            impl EventView for $ty {
                #[inline]
                fn view(payload: &EventPayload) -> Option<&Self> {
                    match payload {
                        EventPayload::$variant(e) => Some(e),
                        _ => None,
                    }
                }
            }
        )+
    };
}

event_views! {
    Application => ApplicationEvent,
    Display => DisplayEvent,
    Window => WindowEvent,
    KeyboardDevice => KeyboardDeviceEvent,
    Keyboard => KeyboardEvent,
    TextEditing => TextEditingEvent,
    TextEditingCandidates => TextEditingCandidatesEvent,
    TextInput => TextInputEvent,
    KeymapChanged => KeymapChangedEvent,
    MouseDevice => MouseDeviceEvent,
    MouseMotion => MouseMotionEvent,
    MouseButton => MouseButtonEvent,
    MouseWheel => MouseWheelEvent,
    JoystickDevice => JoystickDeviceEvent,
    JoystickAxis => JoystickAxisEvent,
    JoystickBall => JoystickBallEvent,
    JoystickHat => JoystickHatEvent,
    JoystickButton => JoystickButtonEvent,
    JoystickBattery => JoystickBatteryEvent,
    GamepadDevice => GamepadDeviceEvent,
    GamepadAxis => GamepadAxisEvent,
    GamepadButton => GamepadButtonEvent,
    GamepadTouchpad => GamepadTouchpadEvent,
    GamepadSensor => GamepadSensorEvent,
    AudioDevice => AudioDeviceEvent,
    CameraDevice => CameraDeviceEvent,
    Sensor => SensorEvent,
    TouchFinger => TouchFingerEvent,
    PenProximity => PenProximityEvent,
    PenTouch => PenTouchEvent,
    PenMotion => PenMotionEvent,
    PenButton => PenButtonEvent,
    PenAxis => PenAxisEvent,
    Drop => DropEvent,
    Clipboard => ClipboardEvent,
    Render => RenderEvent,
    User => UserEvent,
    Unknown => UnknownEvent,
}

impl Event {
    /// Typed view of the payload, or `None` if the event is not a `T`.
    #[inline]
    pub fn view<T: EventView>(&self) -> Option<&T> {
        T::view(self.payload())
    }

    /// `true` when the payload is a `T`.
    #[inline]
    pub fn is<T: EventView>(&self) -> bool {
        self.view::<T>().is_some()
    }

    /// Runs `f` with the payload if it is a `T`. Returns whether `f` ran.
    pub fn handle<T: EventView, F: FnOnce(&T)>(&self, f: F) -> bool {
        match self.view::<T>() {
            Some(e) => {
                f(e);
                true
            }
            None => false,
        }
    }

    /// Starts a handler chain; see [`Dispatch`].
    pub fn dispatch(&self) -> Dispatch<'_> {
        Dispatch {
            event: self,
            handled: false,
        }
    }

    /// Calls the visitor method matching the active payload.
    pub fn visit<V: EventVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self.payload() {
            EventPayload::Application(e) => visitor.visit_application(e),
            EventPayload::Display(e) => visitor.visit_display(e),
            EventPayload::Window(e) => visitor.visit_window(e),
            EventPayload::KeyboardDevice(e) => visitor.visit_keyboard_device(e),
            EventPayload::Keyboard(e) => visitor.visit_keyboard(e),
            EventPayload::TextEditing(e) => visitor.visit_text_editing(e),
            EventPayload::TextEditingCandidates(e) => visitor.visit_text_editing_candidates(e),
            EventPayload::TextInput(e) => visitor.visit_text_input(e),
            EventPayload::KeymapChanged(e) => visitor.visit_keymap_changed(e),
            EventPayload::MouseDevice(e) => visitor.visit_mouse_device(e),
            EventPayload::MouseMotion(e) => visitor.visit_mouse_motion(e),
            EventPayload::MouseButton(e) => visitor.visit_mouse_button(e),
            EventPayload::MouseWheel(e) => visitor.visit_mouse_wheel(e),
            EventPayload::JoystickDevice(e) => visitor.visit_joystick_device(e),
            EventPayload::JoystickAxis(e) => visitor.visit_joystick_axis(e),
            EventPayload::JoystickBall(e) => visitor.visit_joystick_ball(e),
            EventPayload::JoystickHat(e) => visitor.visit_joystick_hat(e),
            EventPayload::JoystickButton(e) => visitor.visit_joystick_button(e),
            EventPayload::JoystickBattery(e) => visitor.visit_joystick_battery(e),
            EventPayload::GamepadDevice(e) => visitor.visit_gamepad_device(e),
            EventPayload::GamepadAxis(e) => visitor.visit_gamepad_axis(e),
            EventPayload::GamepadButton(e) => visitor.visit_gamepad_button(e),
            EventPayload::GamepadTouchpad(e) => visitor.visit_gamepad_touchpad(e),
            EventPayload::GamepadSensor(e) => visitor.visit_gamepad_sensor(e),
            EventPayload::AudioDevice(e) => visitor.visit_audio_device(e),
            EventPayload::CameraDevice(e) => visitor.visit_camera_device(e),
            EventPayload::Sensor(e) => visitor.visit_sensor(e),
            EventPayload::TouchFinger(e) => visitor.visit_touch_finger(e),
            EventPayload::PenProximity(e) => visitor.visit_pen_proximity(e),
            EventPayload::PenTouch(e) => visitor.visit_pen_touch(e),
            EventPayload::PenMotion(e) => visitor.visit_pen_motion(e),
            EventPayload::PenButton(e) => visitor.visit_pen_button(e),
            EventPayload::PenAxis(e) => visitor.visit_pen_axis(e),
            EventPayload::Drop(e) => visitor.visit_drop(e),
            EventPayload::Clipboard(e) => visitor.visit_clipboard(e),
            EventPayload::Render(e) => visitor.visit_render(e),
            EventPayload::User(e) => visitor.visit_user(e),
            EventPayload::Unknown(e) => visitor.visit_unknown(e),
        }
    }
}

/// Chain of single-type handlers over one event.
///
/// Each [`on`](Dispatch::on) fires only if the payload is its type and no earlier
/// handler in the chain has fired, so at most one handler runs per event.
#[must_use = "call `.handled()` to learn whether a handler ran"]
pub struct Dispatch<'a> {
    event: &'a Event,
    handled: bool,
}

impl<'a> Dispatch<'a> {
    pub fn on<T: EventView, F: FnOnce(&T)>(mut self, f: F) -> Self {
        if !self.handled {
            self.handled = self.event.handle(f);
        }
        self
    }

    /// Runs `f` with the whole event if no handler fired.
    pub fn otherwise<F: FnOnce(&Event)>(mut self, f: F) -> Self {
        if !self.handled {
            f(self.event);
            self.handled = true;
        }
        self
    }

    pub fn handled(self) -> bool {
        self.handled
    }
}

/// One method per payload type; [`Event::visit`] calls exactly one of them.
///
/// Every method defaults to [`visit_default`](EventVisitor::visit_default) with the
/// event's raw discriminant, so a visitor only overrides what it cares about.
/// Adding a payload variant breaks the `match` in [`Event::visit`] until a method is
/// added here, but existing visitors keep compiling and receive the new variant in
/// `visit_default`. Code that must handle every payload explicitly should
/// `match` on [`Event::payload`] instead, which the compiler checks for
/// exhaustiveness.
pub trait EventVisitor {
    type Output;

    /// Fallback for every payload without an overridden method.
    fn visit_default(&mut self, raw_type: u32) -> Self::Output;

    fn visit_application(&mut self, e: &ApplicationEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_display(&mut self, e: &DisplayEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_window(&mut self, e: &WindowEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_keyboard_device(&mut self, e: &KeyboardDeviceEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_keyboard(&mut self, e: &KeyboardEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_text_editing(&mut self, e: &TextEditingEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_text_editing_candidates(&mut self, e: &TextEditingCandidatesEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_text_input(&mut self, e: &TextInputEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_keymap_changed(&mut self, e: &KeymapChangedEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_mouse_device(&mut self, e: &MouseDeviceEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_mouse_motion(&mut self, e: &MouseMotionEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_mouse_button(&mut self, e: &MouseButtonEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_mouse_wheel(&mut self, e: &MouseWheelEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_joystick_device(&mut self, e: &JoystickDeviceEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_joystick_axis(&mut self, e: &JoystickAxisEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_joystick_ball(&mut self, e: &JoystickBallEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_joystick_hat(&mut self, e: &JoystickHatEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_joystick_button(&mut self, e: &JoystickButtonEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_joystick_battery(&mut self, e: &JoystickBatteryEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_gamepad_device(&mut self, e: &GamepadDeviceEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_gamepad_axis(&mut self, e: &GamepadAxisEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_gamepad_button(&mut self, e: &GamepadButtonEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_gamepad_touchpad(&mut self, e: &GamepadTouchpadEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_gamepad_sensor(&mut self, e: &GamepadSensorEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_audio_device(&mut self, e: &AudioDeviceEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_camera_device(&mut self, e: &CameraDeviceEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_sensor(&mut self, e: &SensorEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_touch_finger(&mut self, e: &TouchFingerEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_pen_proximity(&mut self, e: &PenProximityEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_pen_touch(&mut self, e: &PenTouchEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_pen_motion(&mut self, e: &PenMotionEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_pen_button(&mut self, e: &PenButtonEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_pen_axis(&mut self, e: &PenAxisEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_drop(&mut self, e: &DropEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_clipboard(&mut self, e: &ClipboardEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_render(&mut self, e: &RenderEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_user(&mut self, e: &UserEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
    fn visit_unknown(&mut self, e: &UnknownEvent) -> Self::Output {
        self.visit_default(e.raw_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Keycode, Scancode};
    use crate::event_type::EventType;

    fn key_down() -> Event {
        Event::new(10, KeyboardEvent::new(Scancode::A, Keycode::A, true))
    }

    #[test]
    fn view_matches_only_the_active_payload() {
        let ev = key_down();
        assert!(ev.view::<KeyboardEvent>().is_some());
        assert!(ev.is::<KeyboardEvent>());
        assert!(ev.view::<KeyboardDeviceEvent>().is_none());
        assert!(ev.view::<WindowEvent>().is_none());
        assert!(ev.view::<UnknownEvent>().is_none());
    }

    #[test]
    fn handle_reports_whether_it_ran() {
        let ev = key_down();
        let mut seen = None;
        assert!(ev.handle(|k: &KeyboardEvent| seen = Some(k.scancode)));
        assert_eq!(seen, Some(Scancode::A));
        assert!(!ev.handle(|_: &MouseWheelEvent| panic!("wrong type")));
    }

    #[test]
    fn dispatch_chain_fires_at_most_once() {
        let ev = key_down();
        let mut calls = 0;
        let handled = ev
            .dispatch()
            .on(|_: &KeyboardEvent| calls += 1)
            .on(|_: &KeyboardEvent| calls += 1)
            .handled();
        assert!(handled);
        assert_eq!(calls, 1);
    }

    #[test]
    fn dispatch_otherwise_runs_when_nothing_matched() {
        let ev = Event::quit(0);
        let mut fallback = false;
        let handled = ev
            .dispatch()
            .on(|_: &KeyboardEvent| {})
            .otherwise(|_| fallback = true)
            .handled();
        assert!(handled && fallback);

        let mut fallback = false;
        let handled = key_down()
            .dispatch()
            .on(|_: &KeyboardEvent| {})
            .otherwise(|_| fallback = true)
            .handled();
        assert!(handled && !fallback);
    }

    struct Names;

    impl EventVisitor for Names {
        type Output = &'static str;

        fn visit_default(&mut self, _raw_type: u32) -> &'static str {
            "other"
        }
        fn visit_keyboard(&mut self, _: &KeyboardEvent) -> &'static str {
            "keyboard"
        }
        fn visit_unknown(&mut self, _: &UnknownEvent) -> &'static str {
            "unknown"
        }
    }

    #[test]
    fn visitor_selects_overridden_or_default_branch() {
        assert_eq!(key_down().visit(&mut Names), "keyboard");
        assert_eq!(Event::quit(1).visit(&mut Names), "other");
        let unknown = Event::new(2, UnknownEvent::new(0xFFFF_FFF0).unwrap());
        assert_eq!(unknown.visit(&mut Names), "unknown");
    }

    struct RawTypes;

    impl EventVisitor for RawTypes {
        type Output = u32;
        fn visit_default(&mut self, raw_type: u32) -> u32 {
            raw_type
        }
    }

    #[test]
    fn common_header_is_available_for_every_payload() {
        let user = Event::new(4, UserEvent::new(0x8005).unwrap());
        let unknown = Event::new(5, UnknownEvent::new(0x0777).unwrap());
        for ev in [key_down(), user, unknown, Event::quit(6)] {
            let common = ev.common();
            assert_eq!(common.timestamp, ev.timestamp());
            assert_eq!(common.raw_type, ev.raw_type());
            assert_eq!(common.event_type(), ev.event_type());
            assert_eq!(common.category(), ev.category());
        }
    }

    #[test]
    fn default_branch_receives_the_event_tag() {
        let ev = Event::new(3, WindowEvent::new(WindowEventKind::Exposed, 1, 0, 0));
        assert_eq!(ev.visit(&mut RawTypes), EventType::WindowExposed.as_raw());
        assert_eq!(ev.visit(&mut RawTypes), ev.raw_type());
    }
}
