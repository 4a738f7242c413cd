//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use pethub_auth::JwtDecoder;
use pethub_core::config::AppConfig;
use pethub_database::StoreManager;
use pethub_worker::ActionRecorder;

/// Shared dependencies passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Action log and monitored-user stores
    pub stores: StoreManager,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Action recorder. Every mutating handler mounted on this state calls
    /// it after a successful write so the monitor sees the action.
    pub recorder: ActionRecorder,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Build state from configuration and already-initialized stores.
    pub fn new(config: AppConfig, stores: StoreManager) -> Self {
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let recorder = ActionRecorder::new(stores.action_log());
        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            recorder,
            started_at: Instant::now(),
        }
    }
}
