//! State machine definition

use super::events::Event;

/// Driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Constructed; no lines claimed, bus closed
    #[default]
    Uninitialized,
    /// Claiming lines, opening the bus and sending the init sequence
    Initializing,
    /// Accepting drawing operations
    Ready,
}

impl State {
    /// Check if drawing operations are accepted
    pub fn is_ready(&self) -> bool {
        matches!(self, State::Ready)
    }

    /// Check if bus writes are allowed
    ///
    /// The init sequence itself writes while `Initializing`.
    pub fn can_write(&self) -> bool {
        matches!(self, State::Initializing | State::Ready)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Uninitialized, InitStarted) => Initializing,
            (Ready, InitStarted) => Initializing,

            (Initializing, InitComplete) => Ready,
            (Initializing, TransportFault) => Uninitialized,

            (_, Released) => Uninitialized,

            // Default: stay in current state
            _ => self,
        }
    }
}
