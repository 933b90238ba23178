//! WebSocket live search.
//!
//! Keystrokes arrive as `input` messages and are debounced; `submit`
//! messages run immediately and cancel any pending keystroke search.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use cinestream_core::{classify_input, Debouncer, InputAction, SearchView};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::metrics::{
    WS_CONNECTIONS_ACTIVE, WS_CONNECTIONS_TOTAL, WS_MESSAGES_RECEIVED, WS_MESSAGES_SENT,
};
use crate::state::AppState;

/// Message sent by the search panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The input text changed.
    Input { text: String },
    /// Enter key, search button, suggestion chip or voice result.
    Submit { text: String },
    /// Delete one history entry.
    RemoveHistory { query: String },
    /// Delete all history entries.
    ClearHistory,
}

impl ClientMessage {
    fn kind(&self) -> &'static str {
        match self {
            ClientMessage::Input { .. } => "input",
            ClientMessage::Submit { .. } => "submit",
            ClientMessage::RemoveHistory { .. } => "remove_history",
            ClientMessage::ClearHistory => "clear_history",
        }
    }
}

/// Message sent back to the search panel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Replace the panel contents.
    View { view: SearchView },
    /// The client message could not be handled.
    Error { message: String },
}

impl ServerMessage {
    fn kind(&self) -> &'static str {
        match self {
            ServerMessage::View { .. } => "view",
            ServerMessage::Error { .. } => "error",
        }
    }
}

fn deliver(outbox: &mpsc::UnboundedSender<ServerMessage>, msg: ServerMessage) {
    WS_MESSAGES_SENT.with_label_values(&[msg.kind()]).inc();
    // A closed outbox means the client went away
    let _ = outbox.send(msg);
}

/// Per-connection live search state.
pub struct LiveSearchSession {
    state: Arc<AppState>,
    debouncer: Debouncer,
    outbox: mpsc::UnboundedSender<ServerMessage>,
}

impl LiveSearchSession {
    pub fn new(state: Arc<AppState>, outbox: mpsc::UnboundedSender<ServerMessage>) -> Self {
        let debouncer = Debouncer::new(state.debounce());
        Self {
            state,
            debouncer,
            outbox,
        }
    }

    /// Parse and handle a raw text frame.
    pub async fn handle_text(&mut self, text: &str) {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(msg) => self.handle(msg).await,
            Err(e) => {
                debug!("Rejected live search message: {}", e);
                deliver(
                    &self.outbox,
                    ServerMessage::Error {
                        message: format!("Invalid message: {}", e),
                    },
                );
            }
        }
    }

    pub async fn handle(&mut self, msg: ClientMessage) {
        WS_MESSAGES_RECEIVED.with_label_values(&[msg.kind()]).inc();

        match msg {
            ClientMessage::Input { text } => {
                self.debouncer.cancel();
                match classify_input(&text) {
                    InputAction::ShowHistory => self.send_history().await,
                    InputAction::Search(query) => {
                        let state = Arc::clone(&self.state);
                        let outbox = self.outbox.clone();
                        self.debouncer.schedule(async move {
                            let view = state.engine().await.query(&query);
                            deliver(&outbox, ServerMessage::View { view });
                        });
                    }
                }
            }
            ClientMessage::Submit { text } => {
                self.debouncer.cancel();
                let view = self.state.engine().await.query(&text);
                deliver(&self.outbox, ServerMessage::View { view });
            }
            ClientMessage::RemoveHistory { query } => {
                self.state.engine().await.remove_from_history(&query);
                self.send_history().await;
            }
            ClientMessage::ClearHistory => {
                self.state.engine().await.clear_history();
                self.send_history().await;
            }
        }
    }

    /// Whether a keystroke search is waiting for the quiet period.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    async fn send_history(&self) {
        let entries = self
            .state
            .engine()
            .await
            .list_history(self.state.history_view_limit());
        deliver(
            &self.outbox,
            ServerMessage::View {
                view: SearchView::History { entries },
            },
        );
    }
}

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle a single WebSocket connection.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (outbox, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Track connection metrics
    WS_CONNECTIONS_TOTAL.inc();
    WS_CONNECTIONS_ACTIVE.inc();

    info!("Live search client connected");

    // Forward session output to the client
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        debug!("WebSocket send failed, client disconnected");
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to serialize ServerMessage: {}", e);
                }
            }
        }
    });

    let mut session = LiveSearchSession::new(state, outbox);

    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Close(_)) => {
                debug!("WebSocket client requested close");
                break;
            }
            Ok(Message::Text(text)) => {
                session.handle_text(text.as_str()).await;
            }
            Ok(_) => {
                // Ping/pong handled by axum, binary frames ignored
            }
            Err(e) => {
                warn!("WebSocket receive error: {}", e);
                break;
            }
        }
    }

    // Clean up
    drop(session);
    send_task.abort();
    WS_CONNECTIONS_ACTIVE.dec();
    info!("Live search client disconnected");
}
