//! Worked examples for classification and typed access, one test per case.

use evdispatch::{
    category_to_string, classify, is_device_event, is_input_event, Category, Event,
    EventRegistry, KeyboardEvent, Keycode, MouseWheelEvent, Scancode, UnknownEvent, UserEvent,
    WindowEvent, WindowEventKind,
};

#[test]
fn escape_key_press() {
    let ev = Event::new(1, KeyboardEvent::new(Scancode::ESCAPE, Keycode::ESCAPE, true));

    assert_eq!(classify(&ev), Category::Keyboard);
    assert!(is_input_event(&ev));
    let key = ev.view::<KeyboardEvent>().expect("keyboard view");
    assert!(key.is_pressed());
    assert_eq!(key.scancode, Scancode::ESCAPE);
}

#[test]
fn mouse_wheel_is_not_a_window_event() {
    let ev = Event::new(
        2,
        MouseWheelEvent {
            x: 0.0,
            y: 1.0,
            ..Default::default()
        },
    );

    assert_eq!(classify(&ev), Category::Mouse);
    assert!(ev.view::<WindowEvent>().is_none());
    assert_eq!(ev.view::<MouseWheelEvent>().map(|w| w.y), Some(1.0));
}

#[test]
fn registered_custom_event() {
    let registry = EventRegistry::new();
    let custom = registry.register_events(4).expect("user range available") + 2;
    let ev = Event::new(3, UserEvent::new(custom).expect("custom id is in the user range"));

    assert_eq!(classify(custom), Category::User);
    assert_eq!(classify(&ev), Category::User);
    assert_eq!(category_to_string(classify(&ev)), "user");
}

#[test]
fn unrecognized_future_value() {
    let raw = 0xFFFF_FFF0u32;

    assert_eq!(classify(raw), Category::Unknown);
    assert!(!is_input_event(raw));
    assert!(!is_device_event(raw));

    let ev = Event::new(4, UnknownEvent::new(raw).expect("not a known type"));
    assert_eq!(ev.category(), Category::Unknown);
    assert!(ev.event_type().is_none());
}

#[test]
fn window_resized_to_800_by_600() {
    let ev = Event::new(5, WindowEvent::new(WindowEventKind::Resized, 1, 800, 600));

    let window = ev.view::<WindowEvent>().expect("window view");
    assert_eq!(window.width(), 800);
    assert_eq!(window.height(), 600);
    assert!(ev.view::<KeyboardEvent>().is_none());
}
