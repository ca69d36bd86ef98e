//! Network module with deferred startup lifecycle.
//!
//! Implements the deferred startup pattern: `new()` creates resources,
//! `start()` binds the TCP listener, and `serve()` starts accepting
//! connections. The split lets the entry point seed the store and wire
//! signal handling between binding and serving.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::config::ServerConfig;
use super::handlers::{
    announcements, assessments, courses, health, locations, messages, users, AppState,
};
use super::middleware::build_http_layers;
use super::shutdown::ShutdownController;
use crate::storage::PortalStore;

/// Manages the full HTTP server lifecycle.
///
/// Follows the deferred startup pattern:
/// 1. `new()` -- takes the shared store, allocates the shutdown controller
/// 2. `start()` -- binds the TCP listener to the configured address
/// 3. `serve()` -- accepts connections until shutdown is signalled
pub struct NetworkModule {
    config: ServerConfig,
    store: Arc<PortalStore>,
    listener: Option<TcpListener>,
    shutdown: Arc<ShutdownController>,
}

impl NetworkModule {
    /// Creates a new network module without binding any port.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<PortalStore>) -> Self {
        Self {
            config,
            store,
            listener: None,
            shutdown: Arc::new(ShutdownController::new()),
        }
    }

    /// Returns a shared reference to the shutdown controller.
    ///
    /// The entry point uses this to trigger shutdown from signal handlers.
    #[must_use]
    pub fn shutdown_controller(&self) -> Arc<ShutdownController> {
        Arc::clone(&self.shutdown)
    }

    /// Assembles the axum router with all routes and middleware.
    ///
    /// Routes:
    /// - `GET /health`, `/health/live`, `/health/ready` -- probes
    /// - `/api/users` -- create, get by id, lookup by username
    /// - `/api/courses` -- catalog, single course, per-course assessments
    /// - `/api/assessments` -- list, get, create, patch
    /// - `/api/messages` -- inbox, ranked board, get, create, patch, read
    /// - `/api/announcements`, `/api/locations` -- list and create
    pub fn build_router(&self) -> Router {
        let state = AppState {
            store: Arc::clone(&self.store),
            shutdown: Arc::clone(&self.shutdown),
            config: Arc::new(self.config.clone()),
            start_time: Instant::now(),
        };

        let layers = build_http_layers(&self.config);

        Router::new()
            .route("/health", get(health::health))
            .route("/health/live", get(health::liveness))
            .route("/health/ready", get(health::readiness))
            .route(
                "/api/users",
                post(users::create_user).get(users::get_user_by_username),
            )
            .route("/api/users/{id}", get(users::get_user))
            .route(
                "/api/courses",
                get(courses::list_courses).post(courses::create_course),
            )
            .route("/api/courses/{id}", get(courses::get_course))
            .route(
                "/api/courses/{id}/assessments",
                get(courses::course_assessments),
            )
            .route(
                "/api/assessments",
                get(assessments::list_assessments).post(assessments::create_assessment),
            )
            .route(
                "/api/assessments/{id}",
                get(assessments::get_assessment).patch(assessments::update_assessment),
            )
            .route(
                "/api/messages",
                get(messages::inbox).post(messages::create_message),
            )
            .route("/api/messages/ranked", get(messages::ranked))
            .route(
                "/api/messages/{id}",
                get(messages::get_message).patch(messages::update_message),
            )
            .route("/api/messages/{id}/read", post(messages::mark_read))
            .route(
                "/api/announcements",
                get(announcements::list_announcements).post(announcements::create_announcement),
            )
            .route(
                "/api/locations",
                get(locations::list_locations).post(locations::create_location),
            )
            .layer(layers)
            .with_state(state)
    }

    /// Binds the TCP listener to the configured host and port.
    ///
    /// Returns the actual bound port, which may differ from the configured
    /// port when port 0 is used (OS-assigned ephemeral port).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!("TCP listener bound to {}:{}", self.config.host, port);

        self.listener = Some(listener);
        Ok(port)
    }

    /// Starts serving requests until the shutdown signal fires.
    ///
    /// Consumes `self` because the listener is moved into the server.
    ///
    /// After the shutdown signal:
    /// 1. Health state transitions to Draining
    /// 2. Waits up to 30 seconds for in-flight requests to complete
    /// 3. Health state transitions to Stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the server encounters a fatal I/O error.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let router = self.build_router();
        let listener = self
            .listener
            .expect("start() must be called before serve()");
        let shutdown_ctrl = self.shutdown;
        let tls = self.config.tls;

        // Transition to Ready so readiness probes pass.
        shutdown_ctrl.set_ready();

        if let Some(ref tls_config) = tls {
            serve_tls(listener, router, tls_config, shutdown_ctrl, shutdown).await
        } else {
            serve_plain(listener, router, shutdown_ctrl, shutdown).await
        }
    }
}

/// Serves plain HTTP using axum's built-in server.
async fn serve_plain(
    listener: TcpListener,
    router: Router,
    shutdown_ctrl: Arc<ShutdownController>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    info!("Serving plain HTTP connections");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    drain(shutdown_ctrl).await;
    Ok(())
}

/// Serves TLS connections using `axum-server` with rustls.
///
/// Reuses the pre-bound TCP listener by converting it to a
/// `std::net::TcpListener`.
async fn serve_tls(
    listener: TcpListener,
    router: Router,
    tls_config: &super::config::TlsConfig,
    shutdown_ctrl: Arc<ShutdownController>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    use axum_server::tls_rustls::RustlsConfig;

    let rustls_config = RustlsConfig::from_pem_file(&tls_config.cert_path, &tls_config.key_path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load TLS certificates: {e}"))?;

    let addr = listener.local_addr()?;
    let std_listener = listener.into_std()?;
    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();

    // Spawn a task that waits for the shutdown signal and triggers graceful
    // shutdown on the axum-server handle.
    tokio::spawn(async move {
        shutdown.await;
        shutdown_handle.graceful_shutdown(None);
    });

    info!("Serving TLS connections on {}", addr);

    axum_server::from_tcp_rustls(std_listener, rustls_config)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    drain(shutdown_ctrl).await;
    Ok(())
}

/// Waits for in-flight requests and transitions to Stopped state.
async fn drain(shutdown_ctrl: Arc<ShutdownController>) {
    shutdown_ctrl.trigger_shutdown();

    let drained = shutdown_ctrl.wait_for_drain(Duration::from_secs(30)).await;
    if drained {
        info!("All requests drained successfully");
    } else {
        warn!("Drain timeout expired with in-flight requests remaining");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SequentialIdGenerator;

    fn test_module() -> NetworkModule {
        let store = Arc::new(PortalStore::new(Arc::new(SequentialIdGenerator::new("id"))));
        NetworkModule::new(ServerConfig::default(), store)
    }

    #[test]
    fn new_creates_module_without_binding() {
        let module = test_module();
        assert!(module.listener.is_none());
    }

    #[test]
    fn shutdown_controller_returns_shared_arc() {
        let module = test_module();
        let s1 = module.shutdown_controller();
        let s2 = module.shutdown_controller();
        assert!(Arc::ptr_eq(&s1, &s2));
    }

    #[test]
    fn build_router_creates_router() {
        let module = test_module();
        let _router = module.build_router();
    }

    #[tokio::test]
    async fn start_binds_to_os_assigned_port() {
        let mut module = test_module();
        let port = module.start().await.expect("start should succeed");
        assert!(port > 0, "OS-assigned port should be > 0");
        assert!(module.listener.is_some());
    }

    #[tokio::test]
    #[should_panic(expected = "start() must be called before serve()")]
    async fn serve_panics_without_start() {
        let module = test_module();
        let _ = module.serve(std::future::pending::<()>()).await;
    }
}
