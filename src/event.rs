//! Message-based control for the clock.

/// Events a scheduler can hand to
/// [`ClockStateMachine::handle_event`](crate::ClockStateMachine::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// Timer ticks have elapsed.
    Ticks(u16),
    /// Main power dropped.
    PowerLost,
    /// Run one step.
    Step,
}
