//! HTTP surface of the portal: configuration, middleware, handlers, and
//! shutdown control.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod module;
pub mod shutdown;

pub use config::{ServerConfig, TlsConfig};
pub use error::ApiError;
pub use handlers::AppState;
pub use module::NetworkModule;
pub use shutdown::{HealthState, InFlightGuard, ShutdownController};
