use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum BidcastError {
    // Registry errors
    ParticipantNotFound(u64),

    // Message errors
    MessageParseError(String),

    // Configuration errors
    ConfigError(String),
}

impl fmt::Display for BidcastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParticipantNotFound(id) => write!(f, "Participant not found: {}", id),
            Self::MessageParseError(msg) => write!(f, "Message parse error: {}", msg),
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for BidcastError {}

// Generic result type for Bidcast
pub type Result<T> = std::result::Result<T, BidcastError>;
