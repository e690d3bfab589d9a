use std::collections::HashMap;
use tokio::sync::mpsc;
use warp::ws::Message;

use crate::core::participant::{Participant, ParticipantId};

// Tracks the live set of connected participants and assigns their ids
pub struct ConnectionRegistry {
    participants: HashMap<ParticipantId, Participant>,
    next_id: u64,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            participants: HashMap::new(),
            next_id: 1,
        }
    }

    // Register a new connection and assign it a fresh id
    pub fn add(&mut self, sender: mpsc::UnboundedSender<Message>) -> ParticipantId {
        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        self.participants.insert(id, Participant::new(id, sender));
        id
    }

    // Remove a connection; removing an absent id is a no-op
    pub fn remove(&mut self, id: ParticipantId) {
        self.participants.remove(&id);
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    /// Stable copy of the current audience, for fan-out while the live set
    /// may change under concurrent connects/disconnects
    pub fn snapshot(&self) -> Vec<(ParticipantId, mpsc::UnboundedSender<Message>)> {
        self.participants
            .iter()
            .map(|(id, p)| (*id, p.sender.clone()))
            .collect()
    }

    // Get current participant count
    pub fn count(&self) -> usize {
        self.participants.len()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
