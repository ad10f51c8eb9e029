//! Shared test infrastructure for binclock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use binclock::{
    Button, ButtonSample, ClockState, ClockStateMachine, DisplayPattern, IndicatorLine,
    InputSource, Meridiem, OutputSink, TimeOfDay,
};
use core::cell::Cell;

// ============================================================================
// Mock Output Sink
// ============================================================================

/// Mock sink that tracks every line and counts writes
pub struct MockSink {
    lines: [bool; 12],
    line_writes: usize,
    pattern_writes: usize,
    last_pattern: Option<DisplayPattern>,
    history: heapless::Vec<(IndicatorLine, bool), 64>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            lines: [false; 12],
            line_writes: 0,
            pattern_writes: 0,
            last_pattern: None,
            history: heapless::Vec::new(),
        }
    }

    fn slot(line: IndicatorLine) -> usize {
        match line {
            IndicatorLine::Hour(bit) => bit as usize,
            IndicatorLine::Minute(bit) => 4 + bit as usize,
            IndicatorLine::Meridiem => 10,
            IndicatorLine::Heartbeat => 11,
        }
    }

    pub fn is_on(&self, line: IndicatorLine) -> bool {
        self.lines[Self::slot(line)]
    }

    pub fn hour_bits(&self) -> [bool; 4] {
        core::array::from_fn(|bit| self.is_on(IndicatorLine::Hour(bit as u8)))
    }

    pub fn minute_bits(&self) -> [bool; 6] {
        core::array::from_fn(|bit| self.is_on(IndicatorLine::Minute(bit as u8)))
    }

    /// True if every time indicator is off (heartbeat not included)
    pub fn display_dark(&self) -> bool {
        IndicatorLine::DISPLAY.iter().all(|line| !self.is_on(*line))
    }

    /// True if every line, heartbeat included, is off
    pub fn all_dark(&self) -> bool {
        self.lines.iter().all(|on| !on)
    }

    /// True if the display lines match `pattern`
    pub fn shows(&self, pattern: &DisplayPattern) -> bool {
        pattern.iter().all(|(line, on)| self.is_on(line) == on)
    }

    pub fn pattern_writes(&self) -> usize {
        self.pattern_writes
    }

    pub fn line_writes(&self) -> usize {
        self.line_writes
    }

    pub fn last_pattern(&self) -> Option<DisplayPattern> {
        self.last_pattern
    }

    pub fn history(&self) -> &[(IndicatorLine, bool)] {
        &self.history
    }
}

impl OutputSink for MockSink {
    fn set_line(&mut self, line: IndicatorLine, on: bool) {
        self.lines[Self::slot(line)] = on;
        self.line_writes += 1;
        let _ = self.history.push((line, on));
    }

    fn write_pattern(&mut self, pattern: &DisplayPattern) {
        self.pattern_writes += 1;
        self.last_pattern = Some(*pattern);
        for (line, on) in pattern.iter() {
            self.set_line(line, on);
        }
    }
}

// ============================================================================
// Mock Inputs
// ============================================================================

/// Mock buttons and power indicator controllable through a shared reference
pub struct MockInputs {
    buttons: Cell<ButtonSample>,
    power: Cell<bool>,
}

impl MockInputs {
    pub fn new() -> Self {
        Self {
            buttons: Cell::new(ButtonSample::NONE),
            power: Cell::new(true),
        }
    }

    /// Hold `button` in addition to any already held
    pub fn press(&self, button: Button) {
        self.buttons.set(self.buttons.get().with(button));
    }

    pub fn release_all(&self) {
        self.buttons.set(ButtonSample::NONE);
    }

    pub fn set_power(&self, present: bool) {
        self.power.set(present);
    }
}

impl InputSource for MockInputs {
    fn buttons(&self) -> ButtonSample {
        self.buttons.get()
    }

    fn power_present(&self) -> bool {
        self.power.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn time(hour: u8, minute: u8, meridiem: Meridiem) -> TimeOfDay {
    TimeOfDay::new(hour, minute, meridiem).unwrap()
}

/// Builds a clock already in `Ticking` at `time`, by tapping the power button
/// on the first (dark) start-flash phase
pub fn ticking_clock(
    inputs: &MockInputs,
    time: TimeOfDay,
) -> ClockStateMachine<'_, MockSink, MockInputs> {
    let mut clock = ClockStateMachine::new(MockSink::new(), inputs).with_time(time);

    inputs.press(Button::Power);
    assert_eq!(clock.step(), ClockState::Setting);
    assert_eq!(clock.step(), ClockState::Ticking);
    inputs.release_all();

    clock
}

/// Credits one minute of ticks and runs a step
pub fn run_minute(clock: &mut ClockStateMachine<'_, MockSink, MockInputs>) -> ClockState {
    let per_minute = clock.config().ticks_per_minute();
    clock.credit_ticks(per_minute);
    clock.step()
}
