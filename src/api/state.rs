//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::reactive::BindingRegistry;
use crate::websocket::{ConnectionHub, HubConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only launch dataset
    pub dataset: Arc<Dataset>,
    /// Dashboard bindings (controls → charts)
    pub registry: Arc<BindingRegistry>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// WebSocket connection hub for live sessions
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Create state with the standard dashboard bindings
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        Self::with_registry(dataset, BindingRegistry::dashboard(), config)
    }

    /// Create state with a custom binding registry
    pub fn with_registry(
        dataset: Arc<Dataset>,
        registry: BindingRegistry,
        config: ServerConfig,
    ) -> Self {
        let hub_config = HubConfig {
            max_connections: config.max_connections,
        };

        Self {
            dataset,
            registry: Arc::new(registry),
            config: Arc::new(config),
            start_time: Instant::now(),
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}
