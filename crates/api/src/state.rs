use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: homelogger_db::DbPool,
    /// Server configuration (database path, uploads dir).
    pub config: Arc<ServerConfig>,
    /// Held for the duration of a backup so only one runs at a time.
    pub backup_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(pool: homelogger_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            backup_lock: Arc::new(Mutex::new(())),
        }
    }
}
