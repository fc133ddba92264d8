//! Fetch lifecycle of the root view.
//!
//! The page is always in exactly one [`FetchState`]. Changes go through
//! [`Lifecycle`], which stamps every attempt with a generation so a
//! completion that arrives after teardown is dropped instead of applied.

use dioxus::logger::tracing::{error, info, warn};

use crate::error::FetchError;
use crate::shared::types::WeddingInfo;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Error(FetchError),
    Ready(WeddingInfo),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Handle for one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lifecycle {
    generation: u64,
    state: FetchState,
}

impl Lifecycle {
    /// A lifecycle already in `Loading`, with the ticket of its first attempt.
    pub fn started() -> (Self, Ticket) {
        let mut lc = Self::default();
        let ticket = lc.start();
        (lc, ticket)
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Enter `Loading` and hand out the ticket the completion must present.
    pub fn start(&mut self) -> Ticket {
        self.generation += 1;
        self.state = FetchState::Loading;
        Ticket(self.generation)
    }

    /// Apply the outcome of the attempt identified by `ticket`.
    ///
    /// Returns whether the outcome was applied. Stale tickets and repeated
    /// completions are ignored, so `Loading` is left exactly once.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<WeddingInfo, FetchError>) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            warn!(
                "[wedding] dropping completion for attempt {} (current {})",
                ticket.0, self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(info) => {
                info!("[wedding] document loaded (date {})", info.date);
                FetchState::Ready(info)
            }
            Err(e) => {
                error!("[wedding] failed to load wedding document: {e}");
                FetchState::Error(e)
            }
        };
        true
    }

    /// Invalidate any attempt still in flight.
    pub fn teardown(&mut self) {
        self.generation += 1;
    }
}
