//! Event delivery: broadcast to all participants or unicast to one
//!
//! Delivery is best-effort per recipient. A send failure means the
//! recipient's forwarder task is gone (connection closing); it is logged
//! and skipped, never propagated, so one dead connection cannot abort a
//! fan-out or stall the auction for others.

use log::{debug, warn};
use tokio::sync::mpsc;
use warp::ws::Message;

use crate::core::message::ServerMessage;
use crate::core::participant::ParticipantId;
use crate::core::registry::ConnectionRegistry;

/// Serialize an event once and enqueue it to every participant in the
/// snapshot. Returns the number of successful enqueues.
pub fn broadcast_all(
    audience: &[(ParticipantId, mpsc::UnboundedSender<Message>)],
    event: &ServerMessage,
) -> usize {
    let text = match serde_json::to_string(event) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to serialize broadcast event: {}", e);
            return 0;
        }
    };

    let mut sent = 0;
    for (id, sender) in audience {
        if sender.send(Message::text(text.clone())).is_ok() {
            sent += 1;
        } else {
            warn!("Dropping broadcast to disconnected participant {}", id);
        }
    }

    debug!("Broadcast delivered to {}/{} participants", sent, audience.len());
    sent
}

/// Unicast an event to a single participant, if still registered
pub fn send_to(registry: &ConnectionRegistry, id: ParticipantId, event: &ServerMessage) -> bool {
    let text = match serde_json::to_string(event) {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to serialize event for participant {}: {}", id, e);
            return false;
        }
    };

    match registry.get(id) {
        Some(participant) => participant.send_text(&text),
        None => {
            debug!("Unicast target {} already disconnected", id);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn test_broadcast_skips_dead_recipients() {
        let (alive_tx, mut alive_rx) = unbounded_channel();
        let (dead_tx, dead_rx) = unbounded_channel();
        drop(dead_rx);

        let audience = vec![
            (ParticipantId(1), alive_tx),
            (ParticipantId(2), dead_tx),
        ];

        let sent = broadcast_all(&audience, &ServerMessage::accepted(10, ParticipantId(1)));
        assert_eq!(sent, 1);

        let delivered = alive_rx.try_recv().unwrap();
        assert!(delivered.to_str().unwrap().contains("\"current_bid\":10"));
    }

    #[test]
    fn test_send_to_missing_participant_is_not_an_error() {
        let registry = ConnectionRegistry::new();
        assert!(!send_to(&registry, ParticipantId(99), &ServerMessage::rejected(5)));
    }
}
