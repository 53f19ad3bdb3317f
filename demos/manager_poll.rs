use evdispatch::{
    ApplicationEvent, Config, Event, EventFilter, EventManager, Keycode, MouseButton, Scancode,
    VirtualSource, WindowEvent,
};

const CONFIG: &str = r#"
queue_capacity = 256

[logging]
enabled = true
format = "text"
level = "info"
"#;

fn main() -> evdispatch::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::from_toml_str(CONFIG)?;
    let mut manager = EventManager::from_config(&config);

    manager.bus_mut().add_listener(
        |e: &Event| {
            if let Some(w) = e.view::<WindowEvent>() {
                if w.is_resized() {
                    println!("window {} is now {}x{}", w.window_id, w.width(), w.height());
                }
            }
        },
        EventFilter::All,
    );

    let mut input = VirtualSource::new("virtual:input");
    input.press_key(Scancode::A, Keycode::A);
    input.release_key(Scancode::A, Keycode::A);
    input.click(MouseButton::Left, 120.0, 48.0);
    input.resize_window(1, 1280, 720);
    input.quit();
    manager.add_source(input);

    loop {
        let events = manager.run_once();
        let quit = events
            .iter()
            .any(|e| e.view::<ApplicationEvent>().is_some_and(|a| a.is_quit()));
        if quit {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    Ok(())
}
