//! Identifier source adapters.

use crate::workflow::ports::IdSource;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Hands out random version 4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Hands out UUIDs built from an increasing counter.
///
/// Identifiers are predictable across runs, which keeps tests and snapshot
/// output deterministic. The first identifier is `00000000-...-0001`.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    counter: AtomicU64,
}

impl SequentialIdSource {
    /// Creates a source whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a source whose first identifier is `last + 1`.
    #[must_use]
    pub const fn starting_after(last: u64) -> Self {
        Self {
            counter: AtomicU64::new(last),
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_uuid(&self) -> Uuid {
        let next = self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        Uuid::from_u128(u128::from(next))
    }
}
