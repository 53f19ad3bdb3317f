//! Error type for the queue, registry and configuration layers.
//!
//! Classification and typed dispatch never produce these; "not this type" is a
//! `None` or `false` there.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration text is not valid TOML for [`Config`](crate::Config).
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The event queue already holds `capacity` events.
    #[error("event queue is full ({capacity} events)")]
    QueueFull { capacity: usize },

    #[error("event count must be at least 1")]
    InvalidEventCount,

    /// Not enough user-block discriminants left.
    #[error("cannot register {requested} events, only {remaining} user event types remain")]
    RegistryExhausted { requested: usize, remaining: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
