//! Bidcast - a real-time auction broadcaster over WebSockets
//!
//! This library provides a single shared auction (current highest bid and
//! its leader) mutated by concurrent bidders, with every accepted bid
//! broadcast to all connected participants.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod handlers;

// Re-export main components
pub use config::*;
pub use constants::*;
