//! The auction hub: one shared instance coordinating every session
//!
//! Owns the connection registry and the auction state. `try_bid` always runs
//! under the state mutex, so concurrent raises for the same amount resolve to
//! exactly one leader. Lock order is state then registry (read) inside
//! `place_bid`; no other path holds both locks at once.

use log::info;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, RwLock};
use warp::ws::Message;

use crate::core::auction::{AuctionState, BidOutcome};
use crate::core::broadcast::{broadcast_all, send_to};
use crate::core::message::ServerMessage;
use crate::core::participant::ParticipantId;
use crate::core::registry::ConnectionRegistry;
use crate::error::{BidcastError, Result};

pub struct AuctionHub {
    registry: RwLock<ConnectionRegistry>,
    state: Mutex<AuctionState>,
}

impl AuctionHub {
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(ConnectionRegistry::new()),
            state: Mutex::new(AuctionState::new()),
        }
    }

    /// Register a new connection and send it the Welcome snapshot
    pub async fn connect(&self, sender: mpsc::UnboundedSender<Message>) -> ParticipantId {
        let (id, count) = {
            let mut registry = self.registry.write().await;
            let id = registry.add(sender);
            (id, registry.count())
        };
        info!("Participant connected: {}", id);
        info!("Current connections: {}", count);

        let (current_bid, leader) = { self.state.lock().await.snapshot() };

        let registry = self.registry.read().await;
        send_to(&registry, id, &ServerMessage::welcome(current_bid, leader));

        id
    }

    /// Unregister a connection; safe to call more than once
    pub async fn disconnect(&self, id: ParticipantId) {
        let count = {
            let mut registry = self.registry.write().await;
            registry.remove(id);
            registry.count()
        };
        info!("Participant disconnected: {}", id);
        info!("Current connections: {}", count);
    }

    /// Process one bid from a participant.
    ///
    /// Amounts that are missing, non-integer, or not positive never reach the
    /// auction state; the bidder gets a rejection carrying the current bid.
    /// Accepted bids are fanned out to every connected participant while the
    /// state lock is still held, so all participants observe accepted bids in
    /// one global order. Rejections go only to the bidder.
    pub async fn place_bid(
        &self,
        bidder: ParticipantId,
        value: Option<i64>,
    ) -> Result<BidOutcome> {
        if self.registry.read().await.get(bidder).is_none() {
            return Err(BidcastError::ParticipantNotFound(bidder.0));
        }

        let amount = match value {
            Some(v) if v > 0 => v as u64,
            _ => {
                let current_bid = { self.state.lock().await.snapshot().0 };
                let registry = self.registry.read().await;
                send_to(&registry, bidder, &ServerMessage::invalid_amount(current_bid));
                return Ok(BidOutcome::Rejected { current_bid });
            }
        };

        let mut state = self.state.lock().await;
        let outcome = state.try_bid(bidder, amount);
        match outcome {
            BidOutcome::Accepted { amount, leader } => {
                let audience = self.registry.read().await.snapshot();
                broadcast_all(&audience, &ServerMessage::accepted(amount, leader));
            }
            BidOutcome::Rejected { current_bid } => {
                let registry = self.registry.read().await;
                send_to(&registry, bidder, &ServerMessage::rejected(current_bid));
            }
        }
        Ok(outcome)
    }

    /// Current number of connected participants
    pub async fn participant_count(&self) -> usize {
        self.registry.read().await.count()
    }
}

impl Default for AuctionHub {
    fn default() -> Self {
        Self::new()
    }
}

// Shared reference to the hub, one per process
pub type SharedHub = Arc<AuctionHub>;

pub fn create_hub() -> SharedHub {
    Arc::new(AuctionHub::new())
}
