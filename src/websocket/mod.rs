//! WebSocket Dashboard Sessions
//!
//! Live transport between the dashboard page and the binding layer.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks active connections and enforces the limit
//! - **Handler**: Handles WebSocket upgrade and runs one session per connection
//! - **Messages**: Defines client and server message formats
//!
//! ## Protocol
//!
//! On connect the server sends `connected`, `layout`, and one `figure` per
//! output. Afterwards every `input` message yields a `figure` for each output
//! bound to that control.
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'input', control: 'site-dropdown', value: 'KSC LC-39A'}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'figure') Plotly.react(msg.output, msg.figure.data, msg.figure.layout);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, ConnectionInfo, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage};
