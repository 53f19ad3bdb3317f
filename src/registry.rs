//! Allocation of application-defined event types.
//!
//! [`EventRegistry`] hands out consecutive discriminants from the user block, the
//! same way the platform reserves custom event ids. Allocations never overlap and
//! are never returned.

use crate::error::{Error, Result};
use crate::event_type::{is_user_event, EventTag, USER_EVENT_FIRST, USER_EVENT_LAST};
use std::sync::atomic::{AtomicU32, Ordering};

/// Thread-safe cursor over the user block.
#[derive(Debug)]
pub struct EventRegistry {
    next: AtomicU32,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegistry {
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(USER_EVENT_FIRST),
        }
    }

    /// Reserves `count` consecutive user event types and returns the first.
    ///
    /// # Errors
    /// - [`Error::InvalidEventCount`] when `count` is zero.
    /// - [`Error::RegistryExhausted`] when fewer than `count` types remain.
    pub fn register_events(&self, count: usize) -> Result<u32> {
        if count == 0 {
            return Err(Error::InvalidEventCount);
        }

        let mut current = self.next.load(Ordering::Relaxed);
        loop {
            let remaining = self.remaining_from(current);
            if count > remaining {
                tracing::warn!(requested = count, remaining, "user event range exhausted");
                return Err(Error::RegistryExhausted {
                    requested: count,
                    remaining,
                });
            }

            // count <= remaining <= 0x8000, so the cast and the add cannot overflow.
            let next = current + count as u32;
            match self
                .next
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => {
                    tracing::debug!(first = current, count, "registered user events");
                    return Ok(current);
                }
                Err(observed) => current = observed,
            }
        }
    }

    /// Number of user event types not yet handed out.
    pub fn remaining(&self) -> usize {
        self.remaining_from(self.next.load(Ordering::Relaxed))
    }

    /// `true` for any discriminant in the user block, registered or not.
    pub fn is_custom(tag: impl EventTag) -> bool {
        is_user_event(tag.raw_type())
    }

    fn remaining_from(&self, next: u32) -> usize {
        (USER_EVENT_LAST + 1).saturating_sub(next) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_type::EventType;

    #[test]
    fn allocations_are_consecutive_and_disjoint() {
        let reg = EventRegistry::new();
        let a = reg.register_events(3).unwrap();
        let b = reg.register_events(1).unwrap();
        assert_eq!(a, USER_EVENT_FIRST);
        assert_eq!(b, USER_EVENT_FIRST + 3);
        assert!(EventRegistry::is_custom(a));
        assert!(EventRegistry::is_custom(b));
    }

    #[test]
    fn zero_count_is_rejected() {
        let reg = EventRegistry::new();
        assert!(matches!(reg.register_events(0), Err(Error::InvalidEventCount)));
    }

    #[test]
    fn exhaustion_reports_remaining() {
        let reg = EventRegistry::new();
        let total = reg.remaining();
        assert_eq!(total, 0x8000);
        reg.register_events(total - 2).unwrap();
        match reg.register_events(5) {
            Err(Error::RegistryExhausted { requested, remaining }) => {
                assert_eq!((requested, remaining), (5, 2));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(reg.register_events(2).unwrap(), USER_EVENT_LAST - 1);
        assert_eq!(reg.remaining(), 0);
    }

    #[test]
    fn platform_types_are_not_custom() {
        assert!(!EventRegistry::is_custom(EventType::Quit));
        assert!(!EventRegistry::is_custom(0xFFFF_FFF0u32));
    }

    #[test]
    fn concurrent_registration_never_overlaps() {
        let reg = std::sync::Arc::new(EventRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = reg.clone();
                std::thread::spawn(move || {
                    (0..50).map(|_| reg.register_events(2).unwrap()).collect::<Vec<_>>()
                })
            })
            .collect();
        let mut firsts: Vec<u32> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        firsts.sort_unstable();
        for pair in firsts.windows(2) {
            assert!(pair[1] - pair[0] >= 2);
        }
        assert_eq!(firsts.len(), 400);
    }
}
