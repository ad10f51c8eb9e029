//! Binary display encoding and the output-line abstraction.
//!
//! Provides [`DisplayPattern`], the on/off state of every time indicator for a
//! given [`TimeOfDay`], and the [`OutputSink`] trait the state machine writes
//! it through. Indicator lines are named by meaning ([`IndicatorLine`]), not by
//! port or pin, so the encoding stays independent of any board layout.

use crate::time::TimeOfDay;
use heapless::Vec;

/// Number of hour indicator lines.
pub const HOUR_LINES: usize = 4;

/// Number of minute indicator lines.
pub const MINUTE_LINES: usize = 6;

/// Number of lines carried by a [`DisplayPattern`] (hours, minutes, meridiem).
pub const DISPLAY_LINES: usize = HOUR_LINES + MINUTE_LINES + 1;

/// One indicator output. Bit lines are numbered LSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorLine {
    /// Hour bit, 0..4.
    Hour(u8),
    /// Minute bit, 0..6.
    Minute(u8),
    /// On for PM.
    Meridiem,
    /// Seconds heartbeat; not part of the time display.
    Heartbeat,
}

impl IndicatorLine {
    /// Every line a [`DisplayPattern`] covers, in refresh order.
    pub const DISPLAY: [IndicatorLine; DISPLAY_LINES] = [
        IndicatorLine::Hour(0),
        IndicatorLine::Hour(1),
        IndicatorLine::Hour(2),
        IndicatorLine::Hour(3),
        IndicatorLine::Minute(0),
        IndicatorLine::Minute(1),
        IndicatorLine::Minute(2),
        IndicatorLine::Minute(3),
        IndicatorLine::Minute(4),
        IndicatorLine::Minute(5),
        IndicatorLine::Meridiem,
    ];
}

/// Hour indicator states for counter values 0..=12.
///
/// Hours are shown as their own 4-bit value (9 is `1001`, 12 is `1100`), not
/// as an offset from 1. Entry 0 is unreachable for a valid time and stays dark.
const HOUR_TABLE: [[bool; HOUR_LINES]; 13] = [
    [false, false, false, false],
    [true, false, false, false],
    [false, true, false, false],
    [true, true, false, false],
    [false, false, true, false],
    [true, false, true, false],
    [false, true, true, false],
    [true, true, true, false],
    [false, false, false, true],
    [true, false, false, true],
    [false, true, false, true],
    [true, true, false, true],
    [false, false, true, true],
];

/// Hour indicator states (LSB first) for a raw hour counter.
///
/// Counter values outside the table light nothing.
pub fn hour_bits(hour: u8) -> [bool; HOUR_LINES] {
    HOUR_TABLE
        .get(hour as usize)
        .copied()
        .unwrap_or([false; HOUR_LINES])
}

/// Minute indicator states (LSB first): the low six bits of `minute`.
pub fn minute_bits(minute: u8) -> [bool; MINUTE_LINES] {
    core::array::from_fn(|bit| (minute >> bit) & 1 == 1)
}

/// On/off state of every time indicator for one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayPattern {
    hours: [bool; HOUR_LINES],
    minutes: [bool; MINUTE_LINES],
    meridiem: bool,
}

impl DisplayPattern {
    /// Every indicator off.
    pub const BLANK: DisplayPattern = DisplayPattern {
        hours: [false; HOUR_LINES],
        minutes: [false; MINUTE_LINES],
        meridiem: false,
    };

    /// Encodes a time for display.
    pub fn from_time(time: &TimeOfDay) -> Self {
        Self {
            hours: hour_bits(time.hour()),
            minutes: minute_bits(time.minute()),
            meridiem: time.meridiem().is_pm(),
        }
    }

    /// Hour lines, LSB first.
    pub fn hour_bits(&self) -> [bool; HOUR_LINES] {
        self.hours
    }

    /// Minute lines, LSB first.
    pub fn minute_bits(&self) -> [bool; MINUTE_LINES] {
        self.minutes
    }

    /// Meridiem line.
    pub fn meridiem(&self) -> bool {
        self.meridiem
    }

    /// Returns the state of a line, or `None` for lines outside the pattern
    /// (the heartbeat, or out-of-range bit numbers).
    pub fn get(&self, line: IndicatorLine) -> Option<bool> {
        match line {
            IndicatorLine::Hour(bit) => self.hours.get(bit as usize).copied(),
            IndicatorLine::Minute(bit) => self.minutes.get(bit as usize).copied(),
            IndicatorLine::Meridiem => Some(self.meridiem),
            IndicatorLine::Heartbeat => None,
        }
    }

    /// Iterates `(line, on)` over every display line in refresh order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorLine, bool)> + '_ {
        IndicatorLine::DISPLAY
            .iter()
            .filter_map(move |&line| self.get(line).map(|on| (line, on)))
    }

    /// Lines whose state differs from `previous`, with their new state.
    pub fn changes_from(
        &self,
        previous: &DisplayPattern,
    ) -> Vec<(IndicatorLine, bool), DISPLAY_LINES> {
        let mut changes = Vec::new();
        for (line, on) in self.iter() {
            if previous.get(line) != Some(on) {
                // DISPLAY_LINES bounds the iterator, so push cannot fail.
                let _ = changes.push((line, on));
            }
        }
        changes
    }

    fn set(&mut self, line: IndicatorLine, on: bool) {
        let slot = match line {
            IndicatorLine::Hour(bit) => self.hours.get_mut(bit as usize),
            IndicatorLine::Minute(bit) => self.minutes.get_mut(bit as usize),
            IndicatorLine::Meridiem => Some(&mut self.meridiem),
            IndicatorLine::Heartbeat => None,
        };
        if let Some(slot) = slot {
            *slot = on;
        }
    }
}

impl Default for DisplayPattern {
    fn default() -> Self {
        DisplayPattern::BLANK
    }
}

impl From<&TimeOfDay> for DisplayPattern {
    fn from(time: &TimeOfDay) -> Self {
        DisplayPattern::from_time(time)
    }
}

/// Encodes a time for display. Shorthand for [`DisplayPattern::from_time`].
#[inline]
pub fn display_pattern(time: &TimeOfDay) -> DisplayPattern {
    DisplayPattern::from_time(time)
}

/// Trait for abstracting the indicator outputs.
///
/// Implement this for your LED hardware (GPIO pins, a shift register, port
/// writes). Writes cannot fail; handle any hardware errors internally.
pub trait OutputSink {
    /// Drives one indicator line.
    fn set_line(&mut self, line: IndicatorLine, on: bool);

    /// Drives every display line from `pattern` as one batch.
    ///
    /// The heartbeat line is left untouched. Override this when the hardware
    /// can update several lines in a single write.
    fn write_pattern(&mut self, pattern: &DisplayPattern) {
        for (line, on) in pattern.iter() {
            self.set_line(line, on);
        }
    }
}

impl<O: OutputSink + ?Sized> OutputSink for &mut O {
    fn set_line(&mut self, line: IndicatorLine, on: bool) {
        (**self).set_line(line, on);
    }

    fn write_pattern(&mut self, pattern: &DisplayPattern) {
        (**self).write_pattern(pattern);
    }
}

/// Output wrapper that only forwards lines whose state changed.
///
/// The first write after construction goes through in full, since the
/// hardware state is unknown until then.
pub struct ShadowSink<O: OutputSink> {
    inner: O,
    shown: Option<DisplayPattern>,
    heartbeat: Option<bool>,
}

impl<O: OutputSink> ShadowSink<O> {
    /// Wraps `inner`.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            shown: None,
            heartbeat: None,
        }
    }

    /// Returns the wrapped sink.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Unwraps the sink.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: OutputSink> OutputSink for ShadowSink<O> {
    fn set_line(&mut self, line: IndicatorLine, on: bool) {
        match line {
            IndicatorLine::Heartbeat => {
                if self.heartbeat == Some(on) {
                    return;
                }
                self.heartbeat = Some(on);
            }
            _ => {
                if let Some(shown) = self.shown.as_mut() {
                    if shown.get(line) == Some(on) {
                        return;
                    }
                    shown.set(line, on);
                }
            }
        }
        self.inner.set_line(line, on);
    }

    fn write_pattern(&mut self, pattern: &DisplayPattern) {
        match self.shown {
            Some(previous) => {
                for (line, on) in pattern.changes_from(&previous) {
                    self.inner.set_line(line, on);
                }
            }
            None => self.inner.write_pattern(pattern),
        }
        self.shown = Some(*pattern);
    }
}
