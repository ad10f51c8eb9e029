//! Timing configuration for the clock state machine.

use crate::types::ConfigError;

const MILLIS_PER_MINUTE: u32 = 60_000;

/// Timing constants for a [`ClockStateMachine`](crate::ClockStateMachine).
///
/// The defaults match the reference board: a 250 ms tick (240 ticks per
/// minute), a four-phase start flash and a four-step heartbeat, about one
/// blink per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    tick_interval_ms: u32,
    ticks_per_minute: u16,
    flash_phases: u8,
    heartbeat_period: u8,
}

impl ClockConfig {
    /// Reference board tick interval.
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 250;

    /// Creates a new configuration builder.
    pub fn builder() -> ClockConfigBuilder {
        ClockConfigBuilder::new()
    }

    /// Milliseconds between ticks.
    #[inline]
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Ticks that make up one minute.
    #[inline]
    pub fn ticks_per_minute(&self) -> u16 {
        self.ticks_per_minute
    }

    /// Steps in one start-flash cycle. The display is lit on the last one.
    #[inline]
    pub fn flash_phases(&self) -> u8 {
        self.flash_phases
    }

    /// Steps in one heartbeat cycle. The heartbeat is lit on the last one.
    #[inline]
    pub fn heartbeat_period(&self) -> u8 {
        self.heartbeat_period
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            ticks_per_minute: (MILLIS_PER_MINUTE / Self::DEFAULT_TICK_INTERVAL_MS) as u16,
            flash_phases: 4,
            heartbeat_period: 4,
        }
    }
}

/// Builder for validated clock configurations.
#[derive(Debug, Clone, Copy)]
pub struct ClockConfigBuilder {
    tick_interval_ms: u32,
    flash_phases: u8,
    heartbeat_period: u8,
}

impl ClockConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        let defaults = ClockConfig::default();
        Self {
            tick_interval_ms: defaults.tick_interval_ms,
            flash_phases: defaults.flash_phases,
            heartbeat_period: defaults.heartbeat_period,
        }
    }

    /// Sets the tick interval. Must divide one minute evenly.
    pub fn tick_interval_ms(mut self, millis: u32) -> Self {
        self.tick_interval_ms = millis;
        self
    }

    /// Sets the number of steps in one start-flash cycle.
    pub fn flash_phases(mut self, phases: u8) -> Self {
        self.flash_phases = phases;
        self
    }

    /// Sets the number of steps in one heartbeat cycle.
    pub fn heartbeat_period(mut self, steps: u8) -> Self {
        self.heartbeat_period = steps;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroTickInterval` - Tick interval is zero
    /// * `UnevenTickInterval` - Tick interval does not divide 60 000 ms
    /// * `TooFewFlashPhases` - Fewer than two flash phases
    /// * `ZeroHeartbeatPeriod` - Heartbeat period is zero
    pub fn build(self) -> Result<ClockConfig, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if MILLIS_PER_MINUTE % self.tick_interval_ms != 0 {
            return Err(ConfigError::UnevenTickInterval(self.tick_interval_ms));
        }

        // At most 60 000 with a 1 ms tick, which fits the accumulator.
        let ticks_per_minute = (MILLIS_PER_MINUTE / self.tick_interval_ms) as u16;

        if self.flash_phases < 2 {
            return Err(ConfigError::TooFewFlashPhases(self.flash_phases));
        }

        if self.heartbeat_period == 0 {
            return Err(ConfigError::ZeroHeartbeatPeriod);
        }

        Ok(ClockConfig {
            tick_interval_ms: self.tick_interval_ms,
            ticks_per_minute,
            flash_phases: self.flash_phases,
            heartbeat_period: self.heartbeat_period,
        })
    }
}

impl Default for ClockConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
