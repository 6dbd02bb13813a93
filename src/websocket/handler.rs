//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and runs one dashboard session per
//! connection. Incoming control changes are applied in arrival order.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dataset::Dataset;
use crate::reactive::{ControlChange, DashboardLayout, Session};

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts a session.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let hub = Arc::clone(&state.ws_hub);

    let connection_id = match hub.register().await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting WebSocket connection");
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            if let Ok(text) = serde_json::to_string(&error_msg) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    // Channel for messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let conn_id_for_send = connection_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let mut session = Session::new(Arc::clone(&state.dataset), Arc::clone(&state.registry));

    for msg in greeting(&session, &state.dataset, &connection_id) {
        let _ = tx.send(msg);
    }

    let hub_for_recv = Arc::clone(&hub);
    let conn_id_for_recv = connection_id.clone();

    // Task to receive messages from WebSocket and run the session
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&hub_for_recv, &conn_id_for_recv, &mut session, &tx, msg)
                        .await
                    {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&connection_id).await;
}

/// Messages sent on connect: id, layout, then one figure per output
fn greeting(session: &Session, dataset: &Dataset, connection_id: &str) -> Vec<ServerMessage> {
    let mut messages = vec![
        ServerMessage::Connected {
            connection_id: connection_id.to_string(),
        },
        ServerMessage::Layout {
            layout: DashboardLayout::for_dataset(dataset),
        },
    ];
    messages.extend(session.render().into_iter().map(ServerMessage::from));
    messages
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(
    hub: &ConnectionHub,
    connection_id: &str,
    session: &mut Session,
    tx: &mpsc::UnboundedSender<ServerMessage>,
    message: Message,
) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    for reply in handle_client_message(session, client_msg) {
                        if tx.send(reply).is_err() {
                            return false;
                        }
                    }
                    let _ = hub.record_event(connection_id).await;
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    // Send error but keep connection open
                    let _ = tx.send(ServerMessage::Error {
                        message: format!("Invalid message format: {}", e),
                    });
                }
            }
            true
        }
        Message::Binary(_) => {
            let _ = tx.send(ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            });
            true
        }
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

/// Apply a parsed client message to the session and collect the replies
fn handle_client_message(session: &mut Session, message: ClientMessage) -> Vec<ServerMessage> {
    match message {
        ClientMessage::Input { control, value } => match ControlChange::from_json(control, value) {
            Ok(change) => session
                .apply(change)
                .into_iter()
                .map(ServerMessage::from)
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected control value");
                vec![ServerMessage::Error {
                    message: e.to_string(),
                }]
            }
        },
        ClientMessage::Render => session.render().into_iter().map(ServerMessage::from).collect(),
        ClientMessage::Ping => vec![ServerMessage::Pong],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, OutcomeClass};
    use crate::reactive::{BindingRegistry, ControlId, OutputId};
    use serde_json::json;

    fn session() -> Session {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 100.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("B", 7000.0, OutcomeClass::Failure, "B5"),
        ])
        .unwrap();
        Session::new(Arc::new(dataset), Arc::new(BindingRegistry::dashboard()))
    }

    #[test]
    fn test_input_produces_figures() {
        let mut session = session();
        let replies = handle_client_message(
            &mut session,
            ClientMessage::Input {
                control: ControlId::PayloadSlider,
                value: json!([0, 1000]),
            },
        );

        assert_eq!(replies.len(), 1);
        match &replies[0] {
            ServerMessage::Figure { output, figure } => {
                assert_eq!(*output, OutputId::SuccessPayloadScatterChart);
                assert_eq!(figure.point_count(), 1);
            }
            other => panic!("Expected Figure, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_value_produces_error() {
        let mut session = session();
        let replies = handle_client_message(
            &mut session,
            ClientMessage::Input {
                control: ControlId::PayloadSlider,
                value: json!({"low": 0}),
            },
        );

        assert!(matches!(replies.as_slice(), [ServerMessage::Error { .. }]));
    }

    #[test]
    fn test_render_and_ping() {
        let mut session = session();
        assert_eq!(handle_client_message(&mut session, ClientMessage::Render).len(), 2);
        assert!(matches!(
            handle_client_message(&mut session, ClientMessage::Ping).as_slice(),
            [ServerMessage::Pong]
        ));
    }

    #[test]
    fn test_greeting_order() {
        let session = session();
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 100.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("B", 7000.0, OutcomeClass::Failure, "B5"),
        ])
        .unwrap();

        let messages = greeting(&session, &dataset, "conn-1");

        assert_eq!(messages.len(), 4);
        match &messages[0] {
            ServerMessage::Connected { connection_id } => assert_eq!(connection_id, "conn-1"),
            other => panic!("Expected Connected, got {:?}", other),
        }
        match &messages[1] {
            ServerMessage::Layout { layout } => {
                assert_eq!(layout.site_dropdown.options.len(), 3);
            }
            other => panic!("Expected Layout, got {:?}", other),
        }
        assert!(matches!(
            &messages[2],
            ServerMessage::Figure { output: OutputId::SuccessPieChart, .. }
        ));
        assert!(matches!(
            &messages[3],
            ServerMessage::Figure { output: OutputId::SuccessPayloadScatterChart, .. }
        ));
    }
}
