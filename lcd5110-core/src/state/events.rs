//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Init sequence started (configuration already validated)
    InitStarted,
    /// Every init command and the clear went out
    InitComplete,
    /// Bus or GPIO failed part way through init
    TransportFault,
    /// Bus handle closed by the owner
    Released,
}
