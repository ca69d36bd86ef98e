//! Identity generation for newly created records.
//!
//! The store calls [`IdGenerator::next_id`] exactly once per create and
//! trusts the result to be unique; it never validates or reuses ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of unique record identities.
///
/// Boxed behind `Arc<dyn IdGenerator>` so tests can substitute a
/// deterministic implementation.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identity, unique across the process lifetime.
    fn next_id(&self) -> String;
}

/// Production generator backed by UUID v4.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator producing `"{prefix}1"`, `"{prefix}2"`, ...
///
/// For tests and demos where stable ids matter.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator with the given id prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{n}", self.prefix)
    }
}
