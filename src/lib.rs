//! Event categorization and typed dispatch for a multimedia platform's event union.
//!
//! Every platform event carries a `u32` discriminant. This crate models the union
//! as a closed Rust enum ([`EventPayload`]) inside an [`Event`] record, sorts any
//! discriminant into a [`Category`] with [`classify`], and offers typed access
//! through views, chained handlers and visitors (see [`dispatch`]).
//!
//! Around that core sit the pieces needed to run without a native library:
//! event sources and an in-memory [`EventQueue`], the custom-event
//! [`EventRegistry`], a listener [`EventBus`], and the [`EventManager`] that ties
//! them together from a TOML [`Config`].
//!
//! ```
//! use evdispatch::{classify, Category, EventType};
//!
//! assert_eq!(classify(EventType::KeyDown), Category::Keyboard);
//! assert_eq!(classify(0x8001u32), Category::User);
//! assert_eq!(classify(0xFFFF_FFF0u32), Category::Unknown);
//! ```

pub mod backends;
pub mod category;
pub mod codes;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod event_type;
pub mod eventbus;
pub mod filtered_listener;
pub mod logger;
pub mod manager;
pub mod queue;
pub mod registry;
pub mod source;

pub use backends::VirtualSource;
pub use category::*;
pub use codes::*;
pub use config::{Config, LogFormat, LogLevel, LoggingConfig};
pub use dispatch::{Dispatch, EventView, EventVisitor};
pub use error::{Error, Result};
pub use event::*;
pub use event_type::*;
pub use eventbus::{EventBus, EventFilter, EventListener, ListenerId};
pub use filtered_listener::FilteredListener;
pub use logger::Logger;
pub use manager::EventManager;
pub use queue::{EventQueue, WatchId, DEFAULT_QUEUE_CAPACITY};
pub use registry::EventRegistry;
pub use source::EventSource;
