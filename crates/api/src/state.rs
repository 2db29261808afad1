use std::sync::Arc;

use ladle_db::store::Stores;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (store handles are `Arc`-backed trait objects).
#[derive(Clone)]
pub struct AppState {
    /// Repository handles; Postgres in production, in-memory in tests.
    pub stores: Stores,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
