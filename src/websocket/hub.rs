//! WebSocket Connection Hub
//!
//! Tracks live dashboard sessions and enforces the connection limit.
//! Sessions are independent: each owns its control values, so the hub
//! never routes messages between them.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

/// Configuration for the connection hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent connections
    pub max_connections: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            max_connections: 256,
        }
    }
}

/// Bookkeeping for one connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connected_at: Instant,
    /// Control changes handled on this connection
    pub events: u64,
}

/// Registry of live WebSocket connections
pub struct ConnectionHub {
    connections: RwLock<HashMap<ConnectionId, ConnectionInfo>>,
    config: HubConfig,
}

impl ConnectionHub {
    /// Create a new connection hub
    pub fn new(config: HubConfig) -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Register a new WebSocket connection
    ///
    /// Returns the connection ID on success, or an error if the connection
    /// limit has been reached.
    pub async fn register(&self) -> Result<ConnectionId, HubError> {
        let mut connections = self.connections.write().await;
        if connections.len() >= self.config.max_connections {
            return Err(HubError::TooManyConnections(self.config.max_connections));
        }

        let id = Uuid::new_v4().to_string();
        connections.insert(
            id.clone(),
            ConnectionInfo {
                connected_at: Instant::now(),
                events: 0,
            },
        );

        tracing::info!(connection_id = %id, "WebSocket connected");
        Ok(id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, id: &str) {
        if let Some(info) = self.connections.write().await.remove(id) {
            tracing::info!(
                connection_id = %id,
                events = info.events,
                duration_secs = info.connected_at.elapsed().as_secs(),
                "WebSocket disconnected"
            );
        }
    }

    /// Count a handled control change against a connection
    pub async fn record_event(&self, id: &str) -> Result<(), HubError> {
        let mut connections = self.connections.write().await;
        let info = connections.get_mut(id).ok_or(HubError::ConnectionNotFound)?;
        info.events += 1;
        Ok(())
    }

    /// Get the current connection count
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// How long a connection has been open
    pub async fn connection_age(&self, id: &str) -> Option<Duration> {
        self.connections
            .read()
            .await
            .get(id)
            .map(|info| info.connected_at.elapsed())
    }
}

/// Errors that can occur in the connection hub
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many connections (limit: {0})")]
    TooManyConnections(usize),

    #[error("Connection not found")]
    ConnectionNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HubConfig::default();
        assert_eq!(config.max_connections, 256);
    }

    #[tokio::test]
    async fn test_register_unregister() {
        let hub = ConnectionHub::new(HubConfig::default());

        let id = hub.register().await.unwrap();
        assert_eq!(hub.connection_count().await, 1);
        assert!(hub.connection_age(&id).await.is_some());

        hub.record_event(&id).await.unwrap();

        hub.unregister(&id).await;
        assert_eq!(hub.connection_count().await, 0);
        assert!(matches!(
            hub.record_event(&id).await,
            Err(HubError::ConnectionNotFound)
        ));
    }

    #[tokio::test]
    async fn test_connection_limit() {
        let hub = ConnectionHub::new(HubConfig { max_connections: 2 });

        let first = hub.register().await.unwrap();
        let _second = hub.register().await.unwrap();

        let err = hub.register().await.unwrap_err();
        assert!(matches!(err, HubError::TooManyConnections(2)));
        assert_eq!(err.to_string(), "Too many connections (limit: 2)");

        hub.unregister(&first).await;
        assert!(hub.register().await.is_ok());
    }
}
