use futures_util::sink::SinkExt;
use futures_util::stream::StreamExt;
use log::{debug, error, info, warn};
use std::convert::Infallible;
use tokio::sync::mpsc;
use warp::ws::{Message, WebSocket};
use warp::Filter;

use crate::constants::WS_PATH;
use crate::core::hub::SharedHub;
use crate::core::message::{parse_client_message, ClientCommand};
use crate::core::participant::ParticipantId;

// Handle one WebSocket connection for its whole lifetime
pub async fn handle_ws_client(ws: WebSocket, hub: SharedHub) {
    let (mut ws_tx, mut ws_rx) = ws.split();
    let (tx, rx) = mpsc::unbounded_channel();

    // Forward outbound messages from the participant's channel to the socket.
    // Sends to this participant are channel enqueues, so a slow socket here
    // never blocks another session's bid processing.
    tokio::task::spawn(async move {
        let mut rx = rx;
        while let Some(message) = rx.recv().await {
            if let Err(e) = ws_tx.send(message).await {
                error!("Failed to send WebSocket message: {}", e);
                break;
            }
        }
    });

    // Register and receive the Welcome snapshot
    let participant_id = hub.connect(tx).await;

    // Receive until the client disconnects or the transport fails
    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(msg) => {
                if msg.is_text() {
                    process_message(msg, participant_id, &hub).await;
                } else if msg.is_close() {
                    break;
                }
            }
            Err(e) => {
                error!("WebSocket error for participant {}: {}", participant_id, e);
                break;
            }
        }
    }

    // Registry removal runs on every exit path, whatever closed the session
    hub.disconnect(participant_id).await;
}

// Process an incoming text frame
async fn process_message(msg: Message, participant_id: ParticipantId, hub: &SharedHub) {
    let text = match msg.to_str() {
        Ok(s) => s,
        Err(_) => {
            warn!("Non-text frame from participant {}", participant_id);
            return;
        }
    };

    match parse_client_message(text) {
        Ok(ClientCommand::Bid(value)) => {
            if let Err(e) = hub.place_bid(participant_id, value).await {
                warn!("Failed to process bid from {}: {}", participant_id, e);
            }
        }
        Ok(ClientCommand::Ignore) => {
            debug!("Ignoring unhandled action from participant {}", participant_id);
        }
        // Malformed frames are dropped; the session stays open
        Err(e) => {
            warn!("Malformed message from participant {}: {}", participant_id, e);
        }
    }
}

/// Build the server routes: the WebSocket endpoint plus a health check
pub fn routes(
    hub: SharedHub,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let ws_route = warp::path(WS_PATH)
        .and(warp::ws())
        .and(with_hub(hub))
        .map(|ws: warp::ws::Ws, hub: SharedHub| {
            info!("New websocket connection");
            ws.on_upgrade(move |socket| handle_ws_client(socket, hub))
        });

    let health_route = warp::path("health").map(|| "OK");

    ws_route.or(health_route)
}

// Helper filter to include the shared hub in each request
fn with_hub(hub: SharedHub) -> impl Filter<Extract = (SharedHub,), Error = Infallible> + Clone {
    warp::any().map(move || hub.clone())
}
