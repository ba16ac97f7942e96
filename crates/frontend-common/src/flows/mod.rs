//! User-driven flows that call the backend.
//!
//! Each flow splits a request into `begin` (validate, mark in flight, hand out a
//! ticket) and `complete` (apply the outcome if the ticket is still current).
//! `submit` runs both halves around the network call.

pub mod login;
pub mod search;

pub use login::{LoginFlow, LoginPhase, LoginTicket, Redirect};
pub use search::{CitySearch, SearchPhase, SearchTicket};

/// Result of asking a flow to start a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Started(T),
    /// A request of this flow is already in flight
    Suppressed,
}

/// In-flight bookkeeping shared by the flows
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
    generation: u64,
    in_flight: bool,
}

impl RequestTracker {
    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Generation of the new request, or `None` while one is pending
    pub(crate) fn start(&mut self) -> Option<u64> {
        if self.in_flight {
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        Some(self.generation)
    }

    /// True when `generation` is still the latest request; clears the flag
    pub(crate) fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Forget whatever is pending; a late completion will be ignored
    pub(crate) fn invalidate(&mut self) {
        self.generation += 1;
        self.in_flight = false;
    }
}
