//! HTTP handler definitions for the portal API.
//!
//! This module defines `AppState` (the shared state carried through axum
//! extractors) and one submodule per resource. Handlers are thin maps from
//! extracted input to a store or query call; none of them contains business
//! logic, and the only error they produce is the 404 mapping of an absent
//! store value.

pub mod announcements;
pub mod assessments;
pub mod courses;
pub mod health;
pub mod locations;
pub mod messages;
pub mod users;

use std::sync::Arc;
use std::time::Instant;

use super::{ServerConfig, ShutdownController};
use crate::storage::PortalStore;

/// Shared application state passed to all axum handlers via `State`
/// extraction.
///
/// Holds `Arc` references to shared resources so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide record store.
    pub store: Arc<PortalStore>,
    /// Graceful shutdown controller with health state and in-flight tracking.
    pub shutdown: Arc<ShutdownController>,
    /// Server configuration (bind address, TLS, CORS, timeout).
    pub config: Arc<ServerConfig>,
    /// Server process start time, used for uptime calculation.
    pub start_time: Instant,
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::storage::SequentialIdGenerator;

    AppState {
        store: Arc::new(PortalStore::new(Arc::new(SequentialIdGenerator::new("id")))),
        shutdown: Arc::new(ShutdownController::new()),
        config: Arc::new(ServerConfig::default()),
        start_time: Instant::now(),
    }
}
