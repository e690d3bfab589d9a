//! Wire message types for the auction protocol

use serde::{Deserialize, Serialize};

use crate::core::participant::ParticipantId;
use crate::error::{BidcastError, Result};

/// Raw inbound frame from a client: `{ "action": "...", "value": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub action: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// What the session loop should do with an inbound frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// A bid action. `None` when the value is missing or not an integer;
    /// validation against the positive-integer rule happens in the hub.
    Bid(Option<i64>),
    /// Structurally valid frame with an action this server does not handle
    Ignore,
}

/// Parse an inbound text frame into a command.
///
/// Frames that are not a JSON object with a string `action` field are a
/// protocol error; unknown actions are ignored rather than rejected.
pub fn parse_client_message(text: &str) -> Result<ClientCommand> {
    let inbound: InboundMessage = serde_json::from_str(text)
        .map_err(|e| BidcastError::MessageParseError(e.to_string()))?;

    if inbound.action != "bid" {
        return Ok(ClientCommand::Ignore);
    }

    Ok(ClientCommand::Bid(
        inbound.value.as_ref().and_then(|v| v.as_i64()),
    ))
}

/// Server-to-client messages.
///
/// Untagged: clients tell the variants apart by their fields, so the wire
/// shapes stay flat (`message` plus event-specific fields).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerMessage {
    /// Sent once to a newly connected participant
    Welcome {
        message: String,
        current_bid: u64,
        highest_bidder: Option<ParticipantId>,
    },
    /// Broadcast to every participant when a bid is accepted
    BidAccepted {
        message: String,
        current_bid: u64,
        highest_bidder: String,
    },
    /// Sent only to the bidder when its bid is rejected
    BidRejected {
        message: String,
        current_bid: u64,
    },
}

impl ServerMessage {
    pub fn welcome(current_bid: u64, leader: Option<ParticipantId>) -> Self {
        Self::Welcome {
            message: "Welcome to the auction!".to_string(),
            current_bid,
            highest_bidder: leader,
        }
    }

    pub fn accepted(amount: u64, leader: ParticipantId) -> Self {
        Self::BidAccepted {
            message: format!("New highest bid: {}", amount),
            current_bid: amount,
            highest_bidder: leader.display_name(),
        }
    }

    pub fn rejected(current_bid: u64) -> Self {
        Self::BidRejected {
            message: "Bid must be higher than the current bid".to_string(),
            current_bid,
        }
    }

    pub fn invalid_amount(current_bid: u64) -> Self {
        Self::BidRejected {
            message: "Bid must be a positive whole number".to_string(),
            current_bid,
        }
    }
}
