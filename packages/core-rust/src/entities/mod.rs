//! Entity definitions, one submodule per entity kind.
//!
//! Each submodule defines three shapes:
//!
//! - the full record as stored and served (with `id` and, where the entity
//!   has one, `createdAt`),
//! - a `New*` create input carrying only caller-supplied fields, with
//!   defaultable fields as `Option` so the store can materialize defaults,
//! - for `Assessment` and `Message` only, a `*Patch` struct listing exactly
//!   the update-eligible fields.
//!
//! Timestamps are integer milliseconds since the Unix epoch. They are
//! optional wherever the original schema column is nullable; consumers treat
//! an absent timestamp as time zero when ordering by recency.

pub mod announcement;
pub mod assessment;
pub mod course;
pub mod location;
pub mod message;
pub mod user;
