//! In-memory record store for the portal.
//!
//! Two layers, following the store design the rest of the server builds on:
//!
//! - [`Collection`]: a generic insertion-ordered id-to-record map, one
//!   instance per entity kind.
//! - [`PortalStore`]: owns the six collections plus the [`IdGenerator`],
//!   and exposes the typed create/get/list/update operations handlers call.
//!
//! Store operations never fail; the only "error" a caller can observe is an
//! absent value (`None`) for an unknown identity.

pub mod collection;
pub mod id;
pub mod store;

pub use collection::{Collection, Keyed};
pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use store::PortalStore;
