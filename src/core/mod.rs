//! Core functionality for the auction broadcaster

pub mod auction;
pub mod broadcast;
pub mod hub;
pub mod message;
pub mod participant;
pub mod registry;

// Re-export main components for convenience
pub use auction::{AuctionState, BidOutcome};
pub use hub::{create_hub, AuctionHub, SharedHub};
pub use message::{parse_client_message, ClientCommand, ServerMessage};
pub use participant::{Participant, ParticipantId};
pub use registry::ConnectionRegistry;
