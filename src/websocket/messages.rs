//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between the
//! dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::reactive::{ControlId, DashboardLayout, OutputId, OutputUpdate};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A control changed value
    Input {
        /// Control id (e.g., "site-dropdown")
        control: ControlId,
        /// New raw value: a site name, or `[low, high]` for the payload range
        value: serde_json::Value,
    },
    /// Re-send every figure at the current control values
    Render,
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Control definitions for building the page
    Layout { layout: DashboardLayout },
    /// New figure for an output
    Figure { output: OutputId, figure: Figure },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl From<OutputUpdate> for ServerMessage {
    fn from(update: OutputUpdate) -> Self {
        ServerMessage::Figure {
            output: update.output,
            figure: update.figure,
        }
    }
}
