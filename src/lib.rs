#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TimeOfDay`**: A valid 12-hour time (hour 1..=12, minute 0..=59, AM/PM)
//! - **`TimeCounters`**: Raw counters that `normalize` folds back into a `TimeOfDay`
//! - **`DisplayPattern`**: On/off state of every hour, minute and meridiem indicator
//! - **`ClockStateMachine`**: Start flash, ticking, button setting and low-power sleep
//! - **`OutputSink`**: Trait to implement for your indicator outputs
//! - **`InputSource`**: Trait to implement for your buttons and power-present signal
//! - **`TickCounter`** / **`PowerLossLatch`**: Interrupt-safe signals drained by the main loop
//! - **`ClockConfig`**: Tick interval, start-flash and heartbeat timing
//!
//! Hours are displayed as their direct 4-bit value (12 is `1100`), minutes as
//! their 6-bit value, both least significant bit first.

#[macro_use]
mod fmt;

pub mod types;
pub mod time;
pub mod display;
pub mod input;
pub mod config;
pub mod signal;
pub mod event;
pub mod clock;
pub mod port;

pub use types::{Button, ConfigError, Meridiem, TimeError};
pub use time::{TimeCounters, TimeOfDay};
pub use display::{display_pattern, DisplayPattern, IndicatorLine, OutputSink, ShadowSink};
pub use input::{ButtonSample, InputSource};
pub use config::{ClockConfig, ClockConfigBuilder};
pub use signal::{PowerLossLatch, TickCounter};
pub use event::ClockEvent;
pub use clock::{ClockState, ClockStateMachine};
pub use port::{PortImage, PortInputs, PortReader, PortSink, PortWriter};

/// Ticks per minute at the reference board's 250 ms tick.
pub const TICKS_PER_MINUTE: u16 = 240;
