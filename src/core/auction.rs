//! The auction state machine
//!
//! A single `AuctionState` is shared by every session. The only state
//! transition is the strictly-greater check-and-set in [`AuctionState::try_bid`];
//! callers must hold the hub's state lock across the whole call so that two
//! concurrent bids for the same amount resolve to exactly one leader.

use crate::core::participant::ParticipantId;

/// Outcome of a bid attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    Accepted {
        amount: u64,
        leader: ParticipantId,
    },
    Rejected {
        current_bid: u64,
    },
}

/// The shared bid ledger: current highest bid and its leader.
///
/// `current_bid` never decreases; `leader` is `None` only in the initial
/// no-bids-yet state.
pub struct AuctionState {
    current_bid: u64,
    leader: Option<ParticipantId>,
}

impl AuctionState {
    pub fn new() -> Self {
        Self {
            current_bid: 0,
            leader: None,
        }
    }

    /// Attempt a bid. Strictly greater than the current bid wins; ties and
    /// lower amounts are rejected and leave the state untouched.
    pub fn try_bid(&mut self, bidder: ParticipantId, amount: u64) -> BidOutcome {
        if amount > self.current_bid {
            self.current_bid = amount;
            self.leader = Some(bidder);
            BidOutcome::Accepted {
                amount,
                leader: bidder,
            }
        } else {
            BidOutcome::Rejected {
                current_bid: self.current_bid,
            }
        }
    }

    /// Consistent read of the current bid and leader, for Welcome messages
    pub fn snapshot(&self) -> (u64, Option<ParticipantId>) {
        (self.current_bid, self.leader)
    }
}

impl Default for AuctionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_no_leader() {
        let state = AuctionState::new();
        assert_eq!(state.snapshot(), (0, None));
    }

    #[test]
    fn test_higher_bid_is_accepted() {
        let mut state = AuctionState::new();
        let alice = ParticipantId(1);

        let outcome = state.try_bid(alice, 50);
        assert_eq!(
            outcome,
            BidOutcome::Accepted {
                amount: 50,
                leader: alice
            }
        );
        assert_eq!(state.snapshot(), (50, Some(alice)));
    }

    #[test]
    fn test_lower_bid_is_rejected_and_leader_unchanged() {
        let mut state = AuctionState::new();
        let alice = ParticipantId(1);
        let bob = ParticipantId(2);

        state.try_bid(alice, 50);
        let outcome = state.try_bid(bob, 30);

        assert_eq!(outcome, BidOutcome::Rejected { current_bid: 50 });
        assert_eq!(state.snapshot(), (50, Some(alice)));
    }

    #[test]
    fn test_tie_is_rejected() {
        let mut state = AuctionState::new();
        let alice = ParticipantId(1);
        let bob = ParticipantId(2);

        state.try_bid(alice, 50);
        let outcome = state.try_bid(bob, 50);

        assert_eq!(outcome, BidOutcome::Rejected { current_bid: 50 });
        assert_eq!(state.snapshot(), (50, Some(alice)));
    }

    #[test]
    fn test_raise_replaces_leader() {
        let mut state = AuctionState::new();
        let alice = ParticipantId(1);
        let bob = ParticipantId(2);

        state.try_bid(alice, 50);
        state.try_bid(bob, 75);
        assert_eq!(state.snapshot(), (75, Some(bob)));
    }

    #[test]
    fn test_current_bid_is_monotonic() {
        let mut state = AuctionState::new();
        let bidder = ParticipantId(1);
        let bids = [10, 5, 30, 30, 29, 31, 0, 100];

        let mut previous = 0;
        for amount in bids {
            state.try_bid(bidder, amount);
            let (current, _) = state.snapshot();
            assert!(current >= previous, "current bid must never decrease");
            previous = current;
        }
        assert_eq!(state.snapshot().0, 100);
    }
}
