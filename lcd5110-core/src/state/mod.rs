//! Driver lifecycle state machine
//!
//! `Uninitialized → Initializing → Ready`, with `Ready` re-entrant through
//! another init. Transitions are explicit and deterministic; anything not
//! listed leaves the state unchanged.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
