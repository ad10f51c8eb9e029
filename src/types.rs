//! Core types shared by the time model and the state machine.

/// Half of the day shown on the meridiem indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Meridiem {
    /// Before noon. Meridiem indicator off.
    Am,

    /// After noon. Meridiem indicator on.
    #[default]
    Pm,
}

impl Meridiem {
    /// Returns the other half of the day.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }

    /// Returns true for PM.
    #[inline]
    pub const fn is_pm(self) -> bool {
        matches!(self, Meridiem::Pm)
    }
}

/// One of the three time-setting buttons.
///
/// Declaration order is the tie-break order used when several buttons are
/// held at once: `Power` wins over `Minute`, which wins over `Hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Button 0. Leaves the time alone; only used to start the clock.
    Power,

    /// Button 1. Adds one minute and clears the tick accumulator.
    Minute,

    /// Button 2. Adds one hour.
    Hour,
}

impl Button {
    /// All buttons in priority order.
    pub const ALL: [Button; 3] = [Button::Power, Button::Minute, Button::Hour];

    /// Position of this button in priority order (and its board label).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Errors from building a [`TimeOfDay`](crate::TimeOfDay) out of raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour outside 1..=12.
    HourOutOfRange(u8),

    /// Minute outside 0..=59.
    MinuteOutOfRange(u8),
}

impl core::fmt::Display for TimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeError::HourOutOfRange(hour) => {
                write!(f, "hour {} is outside 1..=12", hour)
            }
            TimeError::MinuteOutOfRange(minute) => {
                write!(f, "minute {} is outside 0..=59", minute)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimeError {}

/// Clock configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick interval of zero milliseconds.
    ZeroTickInterval,

    /// Tick interval does not divide a minute evenly.
    UnevenTickInterval(u32),

    /// Start flash needs at least one off phase and one on phase.
    TooFewFlashPhases(u8),

    /// Heartbeat period of zero steps.
    ZeroHeartbeatPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickInterval => {
                write!(f, "tick interval must be non-zero")
            }
            ConfigError::UnevenTickInterval(millis) => {
                write!(f, "tick interval of {} ms does not divide one minute", millis)
            }
            ConfigError::TooFewFlashPhases(phases) => {
                write!(f, "start flash needs at least 2 phases, got {}", phases)
            }
            ConfigError::ZeroHeartbeatPeriod => {
                write!(f, "heartbeat period must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
