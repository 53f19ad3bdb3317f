use evdispatch::{
    classify, Event, EventQueue, EventRegistry, EventType, EventVisitor, KeyboardEvent, Keycode,
    MouseWheelEvent, Scancode, UserEvent,
};
use std::thread;
use std::time::Duration;

/// Counts what the consumer sees, one counter per interesting kind.
#[derive(Default)]
struct Tally {
    keys: usize,
    wheel: usize,
    user: usize,
    other: usize,
}

impl EventVisitor for Tally {
    type Output = ();

    fn visit_default(&mut self, _raw_type: u32) {
        self.other += 1;
    }

    fn visit_keyboard(&mut self, _: &KeyboardEvent) {
        self.keys += 1;
    }

    fn visit_mouse_wheel(&mut self, _: &MouseWheelEvent) {
        self.wheel += 1;
    }

    fn visit_user(&mut self, _: &UserEvent) {
        self.user += 1;
    }
}

fn main() -> evdispatch::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    let registry = EventRegistry::new();
    let tick_type = registry.register_events(1)?;

    let queue = EventQueue::with_capacity(64);
    let producer = queue.clone();
    let worker = thread::spawn(move || -> evdispatch::Result<()> {
        for ts in 1..=10u64 {
            let event = match ts % 3 {
                0 => Event::new(ts, KeyboardEvent::new(Scancode::SPACE, Keycode::SPACE, true)),
                1 => Event::new(ts, MouseWheelEvent { y: 1.0, ..Default::default() }),
                _ => match UserEvent::new(tick_type) {
                    Some(user) => Event::new(ts, user.with_code(ts as i32)),
                    None => continue,
                },
            };
            producer.push(event)?;
        }
        producer.push(Event::quit(11))?;
        Ok(())
    });

    let mut tally = Tally::default();
    while let Some(event) = queue.wait_timeout(Duration::from_secs(1)) {
        println!("{:>3} {:<12} {}", event.timestamp(), classify(&event), event.raw_type());
        if event.event_type() == Some(EventType::Quit) {
            break;
        }
        event.visit(&mut tally);
    }
    worker.join().expect("producer thread panicked")?;

    println!(
        "keys={} wheel={} user={} other={}",
        tally.keys, tally.wheel, tally.user, tally.other
    );
    Ok(())
}
