//! `CampusHub` Server — REST API over an in-memory record store.
//!
//! The store holds one keyed collection per entity kind; the query module
//! derives the filtered and ranked views the dashboard widgets consume; the
//! network module exposes both over JSON HTTP.

pub mod network;
pub mod query;
pub mod seed;
pub mod storage;

pub use seed::Seed;
pub use storage::{IdGenerator, PortalStore, SequentialIdGenerator, UuidGenerator};
