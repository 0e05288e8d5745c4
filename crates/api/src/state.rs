use std::sync::Arc;

use hacienda_db::StorageBackend;

use crate::config::ServerConfig;
use crate::ops::Dispatcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Command/query dispatcher owning the storage handles.
    pub dispatcher: Dispatcher,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Backend handle, used for health reporting only.
    pub backend: StorageBackend,
}
