use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::error::Result;
use crate::eventbus::EventListener;
use crate::Event;

/// A listener that writes every event it receives to `tracing`.
///
/// Category filtering is done by the bus the logger is registered on; see
/// [`EventManager::from_config`](crate::EventManager::from_config).
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    format: LogFormat,
    level: LogLevel,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self {
            format: config.format,
            level: config.level,
        }
    }

    /// Renders `event` the way it is logged.
    pub fn format(&self, event: &Event) -> Result<String> {
        match self.format {
            LogFormat::Text => {
                let name = match event.event_type() {
                    Some(t) => t.name().to_string(),
                    None => format!("{:#x}", event.raw_type()),
                };
                Ok(format!("[{}] {} @ {}", event.category(), name, event.timestamp()))
            }
            LogFormat::Json => Ok(serde_json::to_string(event)?),
        }
    }
}

impl EventListener for Logger {
    fn on_event(&mut self, event: &Event) {
        let line = match self.format(event) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(%err, event_type = event.raw_type(), "failed to format event");
                return;
            }
        };
        match self.level {
            LogLevel::Trace => tracing::trace!(target: "evdispatch::events", "{line}"),
            LogLevel::Debug => tracing::debug!(target: "evdispatch::events", "{line}"),
            LogLevel::Info => tracing::info!(target: "evdispatch::events", "{line}"),
            LogLevel::Warn => tracing::warn!(target: "evdispatch::events", "{line}"),
            LogLevel::Error => tracing::error!(target: "evdispatch::events", "{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Keycode, Scancode};
    use crate::event::{KeyboardEvent, UnknownEvent, UserEvent};

    #[test]
    fn text_format_names_category_and_type() {
        let logger = Logger::new();
        let key = Event::new(42, KeyboardEvent::new(Scancode::A, Keycode::A, true));
        assert_eq!(logger.format(&key).unwrap(), "[keyboard] key_down @ 42");

        let user = Event::new(7, UserEvent::new(0x8001).unwrap());
        assert_eq!(logger.format(&user).unwrap(), "[user] 0x8001 @ 7");

        let unknown = Event::new(8, UnknownEvent::new(0x5000).unwrap());
        assert_eq!(logger.format(&unknown).unwrap(), "[unknown] 0x5000 @ 8");
    }

    #[test]
    fn json_format_is_valid_json() {
        let logger = Logger::new().with_format(LogFormat::Json);
        let line = logger.format(&Event::quit(5)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["timestamp"], 5);
    }

    #[test]
    fn logging_never_panics_without_subscriber() {
        let mut logger = Logger::new().with_level(LogLevel::Error);
        logger.on_event(&Event::quit(1));
    }
}
