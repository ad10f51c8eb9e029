//! Wall-clock time model: 12-hour counters and their rollover rules.

use crate::types::{Meridiem, TimeError};

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u8 = 60;

/// Hours on the 12-hour dial.
pub const HOURS_PER_HALF_DAY: u8 = 12;

/// A valid 12-hour time of day.
///
/// The hour is always in 1..=12 and the minute in 0..=59. There is no hour
/// zero: the hour after 12 is 1, and that step flips the meridiem.
///
/// Values only change through [`normalize`](TimeCounters::normalize) and the
/// increment operations, so a `TimeOfDay` seen between two steps is always
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl TimeOfDay {
    /// 12:00 PM, the power-on time.
    pub const NOON: TimeOfDay = TimeOfDay {
        hour: 12,
        minute: 0,
        meridiem: Meridiem::Pm,
    };

    /// Creates a time from already-valid parts.
    ///
    /// # Errors
    /// * `HourOutOfRange` - Hour outside 1..=12
    /// * `MinuteOutOfRange` - Minute outside 0..=59
    pub const fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self, TimeError> {
        if hour == 0 || hour > HOURS_PER_HALF_DAY {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// Hour, 1..=12.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0..=59.
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// AM or PM.
    #[inline]
    pub const fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Returns the raw counters holding this time.
    #[inline]
    pub const fn counters(&self) -> TimeCounters {
        TimeCounters {
            hour: self.hour,
            minute: self.minute,
            meridiem: self.meridiem,
        }
    }

    /// Re-applies rollover. A no-op on any `TimeOfDay`.
    #[inline]
    pub const fn normalize(self) -> Self {
        self.counters().normalize()
    }

    /// Credits one elapsed minute.
    pub const fn advance_minute(self) -> Self {
        let mut counters = self.counters();
        counters.minute += 1;
        counters.normalize()
    }

    /// Minute button: one minute forward.
    ///
    /// Same arithmetic as [`advance_minute`](Self::advance_minute). The state
    /// machine also clears its tick accumulator when this runs, so the new
    /// minute starts from the button press.
    #[inline]
    pub const fn increment_minute_by_one(self) -> Self {
        self.advance_minute()
    }

    /// Hour button: one hour forward, wrapping 12 to 1 with a meridiem flip.
    pub const fn increment_hour_by_one(self) -> Self {
        let mut counters = self.counters();
        counters.hour += 1;
        counters.normalize()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay::NOON
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let suffix = match self.meridiem {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        };
        write!(f, "{}:{:02} {}", self.hour, self.minute, suffix)
    }
}

/// Raw hour/minute/meridiem counters before rollover.
///
/// Counters may hold out-of-range values, e.g. minute 61 after a burst of
/// increments. [`normalize`](Self::normalize) folds them back into a
/// [`TimeOfDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeCounters {
    /// Hour counter; 0 reads as 12.
    pub hour: u8,
    /// Minute counter; whole hours carry into `hour`.
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl TimeCounters {
    /// Creates raw counters.
    #[inline]
    pub const fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Self {
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// Folds the counters into a valid time.
    ///
    /// Whole hours are carried out of the minute counter first. Only then is
    /// the 12-hour wrap applied, so 12:61 AM becomes 1:01 PM with exactly one
    /// meridiem flip. Each 12 hours wrapped flips the meridiem once. An hour
    /// counter of 0 reads as 12.
    pub const fn normalize(self) -> TimeOfDay {
        let mut hour = self.hour;
        let mut minute = self.minute;
        let mut meridiem = self.meridiem;

        while minute >= MINUTES_PER_HOUR {
            minute -= MINUTES_PER_HOUR;
            hour = hour.wrapping_add(1);
        }

        while hour > HOURS_PER_HALF_DAY {
            hour -= HOURS_PER_HALF_DAY;
            meridiem = meridiem.toggled();
        }

        if hour == 0 {
            hour = HOURS_PER_HALF_DAY;
        }

        TimeOfDay {
            hour,
            minute,
            meridiem,
        }
    }
}

impl From<TimeOfDay> for TimeCounters {
    fn from(time: TimeOfDay) -> Self {
        time.counters()
    }
}
