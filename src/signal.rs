//! Interrupt-to-loop signals.
//!
//! The tick timer and power-loss interrupts must not touch the state machine
//! directly. They record what happened in these atomics instead, and the
//! control loop drains them once per cycle through
//! [`ClockStateMachine::service`](crate::ClockStateMachine::service).
//!
//! Both types have `const` constructors, so they can live in `static`s shared
//! between the interrupt handlers and the main loop.

use portable_atomic::{AtomicBool, AtomicU16, Ordering};

/// Count of timer ticks not yet handed to the state machine.
#[derive(Debug)]
pub struct TickCounter {
    pending: AtomicU16,
}

impl TickCounter {
    /// Creates a counter with no pending ticks.
    pub const fn new() -> Self {
        Self {
            pending: AtomicU16::new(0),
        }
    }

    /// Records one tick. Call from the timer interrupt.
    ///
    /// Saturates instead of wrapping if the loop falls far behind.
    pub fn increment(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |pending| {
                pending.checked_add(1)
            });
    }

    /// Takes every pending tick, leaving zero.
    pub fn take(&self) -> u16 {
        self.pending.swap(0, Ordering::AcqRel)
    }

    /// Pending ticks, without taking them.
    pub fn pending(&self) -> u16 {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Edge-triggered power-loss flag.
///
/// Set by the power-fail interrupt. It is read and cleared at the start of a
/// service cycle, so the forced transition replaces whatever that cycle would
/// have done and is never queued behind it.
#[derive(Debug)]
pub struct PowerLossLatch {
    raised: AtomicBool,
}

impl PowerLossLatch {
    /// Creates a cleared latch.
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raises the latch. Call from the power-fail interrupt.
    pub fn signal(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Returns true if the latch was raised, clearing it.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }

    /// Returns true if the latch is raised, leaving it as is.
    pub fn is_set(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for PowerLossLatch {
    fn default() -> Self {
        Self::new()
    }
}
