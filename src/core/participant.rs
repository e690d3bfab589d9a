//! Participant handles
//! One participant per live WebSocket connection

use log::warn;
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tokio::sync::mpsc;
use warp::ws::Message;

/// Identifier assigned to a participant for the lifetime of its connection.
///
/// Assigned by the registry from a monotonically increasing counter, so it
/// carries no transport detail (ports, addresses) and stays meaningful
/// across transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    /// Human-readable name used in broadcast messages
    pub fn display_name(&self) -> String {
        format!("User {}", self.0)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the state of a single connected bidder
pub struct Participant {
    pub id: ParticipantId,
    pub sender: mpsc::UnboundedSender<Message>,
    pub connected_at: Instant,
}

impl Participant {
    pub fn new(id: ParticipantId, sender: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            id,
            sender,
            connected_at: Instant::now(),
        }
    }

    /// Send a text message through this connection.
    ///
    /// The send is an enqueue on the connection's outbound channel; it never
    /// blocks the caller. Returns false when the receiving side is gone.
    pub fn send_text(&self, text: &str) -> bool {
        match self.sender.send(Message::text(text)) {
            Ok(_) => true,
            Err(_) => {
                warn!("Failed to send message to participant {}", self.id);
                false
            }
        }
    }
}
