//! Binary clock state machine.
//!
//! Provides [`ClockStateMachine`], which owns the time of day and the tick
//! accumulator, samples the buttons and power input once per step, and writes
//! the binary display through an [`OutputSink`].

use crate::config::ClockConfig;
use crate::display::{DisplayPattern, IndicatorLine, OutputSink};
use crate::event::ClockEvent;
use crate::input::InputSource;
use crate::signal::{PowerLossLatch, TickCounter};
use crate::time::TimeOfDay;
use crate::types::Button;

/// The current state of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Power-on. Flashes 12:00 PM until any button is pressed.
    Start,
    /// Keeping time. Display shows the time, heartbeat blinks.
    Ticking,
    /// A button was seen. The next step applies it and returns to `Ticking`.
    Setting,
    /// Main power is gone. Time keeps running with every output off.
    LowPowerSleep,
}

/// Drives a binary clock through its states.
///
/// The machine never blocks and never fails. The scheduler calls
/// [`step`](Self::step) (or [`service`](Self::service)) once per tick interval
/// and sleeps in between. Ticks are credited through [`tick`](Self::tick),
/// [`credit_ticks`](Self::credit_ticks) or a [`TickCounter`]; a minute is
/// added once a full minute of ticks has built up.
///
/// The time of day is only reset by the start flash. Entering or leaving
/// `LowPowerSleep` leaves it untouched, so a machine kept in battery-backed
/// memory resumes with the right time when power returns.
///
/// # Type Parameters
/// * `'t` - Lifetime of the input source reference
/// * `O` - Output sink implementation type
/// * `I` - Input source implementation type
pub struct ClockStateMachine<'t, O: OutputSink, I: InputSource> {
    sink: O,
    input: &'t I,
    config: ClockConfig,
    state: ClockState,
    time: TimeOfDay,
    ticks: u16,
    flash_phase: u8,
    heartbeat_phase: u8,
    heartbeat_on: bool,
}

impl<'t, O: OutputSink, I: InputSource> ClockStateMachine<'t, O, I> {
    /// Creates a clock in `Start` with the default timing and every output off.
    pub fn new(sink: O, input: &'t I) -> Self {
        Self::with_config(sink, input, ClockConfig::default())
    }

    /// Creates a clock in `Start` with custom timing and every output off.
    pub fn with_config(mut sink: O, input: &'t I, config: ClockConfig) -> Self {
        sink.write_pattern(&DisplayPattern::BLANK);
        sink.set_line(IndicatorLine::Heartbeat, false);

        Self {
            sink,
            input,
            config,
            state: ClockState::Start,
            time: TimeOfDay::NOON,
            ticks: 0,
            flash_phase: 0,
            heartbeat_phase: 0,
            heartbeat_on: false,
        }
    }

    /// Seeds the time of day, e.g. from retained memory after a warm reset.
    ///
    /// The next lit start-flash phase still shows 12:00 PM, so a seeded time
    /// only survives if a button is pressed before that phase.
    pub fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = time;
        self
    }

    /// Handles a scheduler event.
    ///
    /// Returns the state after the event.
    pub fn handle_event(&mut self, event: ClockEvent) -> ClockState {
        match event {
            ClockEvent::Ticks(count) => self.credit_ticks(count),
            ClockEvent::PowerLost => self.power_lost(),
            ClockEvent::Step => {
                self.step();
            }
        }
        self.state
    }

    /// Runs one scheduling cycle from interrupt-fed signals.
    ///
    /// A raised power-loss latch forces `LowPowerSleep` first, replacing
    /// whatever the cycle would otherwise have done. Pending ticks are then
    /// credited and one step runs.
    pub fn service(&mut self, ticks: &TickCounter, power: &PowerLossLatch) -> ClockState {
        if power.take() {
            self.power_lost();
        }
        self.credit_ticks(ticks.take());
        self.step()
    }

    /// Runs one step of the current state.
    ///
    /// Returns the state the machine is in afterwards.
    pub fn step(&mut self) -> ClockState {
        let previous = self.state;

        match self.state {
            ClockState::Start => self.step_start(),
            ClockState::Ticking => self.step_ticking(),
            ClockState::Setting => self.step_setting(),
            ClockState::LowPowerSleep => self.step_low_power(),
        }

        if self.state != previous {
            debug!("clock: {} -> {}", previous, self.state);
        }
        self.state
    }

    /// Credits one timer tick.
    #[inline]
    pub fn tick(&mut self) {
        self.credit_ticks(1);
    }

    /// Credits `count` timer ticks at once, saturating.
    pub fn credit_ticks(&mut self, count: u16) {
        self.ticks = self.ticks.saturating_add(count);
    }

    /// Main power dropped: turn every output off and sleep.
    ///
    /// Valid from any state. Timekeeping continues in `LowPowerSleep`.
    pub fn power_lost(&mut self) {
        self.sink.write_pattern(&DisplayPattern::BLANK);
        self.sink.set_line(IndicatorLine::Heartbeat, false);
        self.heartbeat_on = false;

        if self.state != ClockState::LowPowerSleep {
            info!("clock: power lost in {} at {}", self.state, self.time);
        }
        self.state = ClockState::LowPowerSleep;
    }

    /// Returns the current state.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Returns the current time of day.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the ticks not yet credited as a minute.
    pub fn tick_accumulator(&self) -> u16 {
        self.ticks
    }

    /// Returns the start-flash phase.
    pub fn flash_phase(&self) -> u8 {
        self.flash_phase
    }

    /// Returns true if the heartbeat line is lit.
    pub fn heartbeat_on(&self) -> bool {
        self.heartbeat_on
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Returns the display pattern for the current time.
    ///
    /// This is what the next refresh writes, whether or not the outputs are
    /// currently lit.
    pub fn display_pattern(&self) -> DisplayPattern {
        DisplayPattern::from_time(&self.time)
    }

    /// Returns the output sink.
    pub fn sink(&self) -> &O {
        &self.sink
    }

    /// Returns the output sink mutably.
    pub fn sink_mut(&mut self) -> &mut O {
        &mut self.sink
    }

    /// Consumes the machine and returns its output sink.
    pub fn release(self) -> O {
        self.sink
    }

    fn step_start(&mut self) {
        let on_phase = self.config.flash_phases() - 1;

        // Start keeps no time.
        self.ticks = 0;

        if self.flash_phase >= on_phase {
            self.flash_phase = 0;
            self.time = TimeOfDay::NOON;
            self.refresh();
        } else {
            self.flash_phase += 1;
            self.sink.write_pattern(&DisplayPattern::BLANK);
        }

        self.poll_buttons();
    }

    fn step_ticking(&mut self) {
        if self.credit_minute() {
            self.refresh();
        }

        self.beat_heartbeat();
        self.poll_buttons();
    }

    fn step_setting(&mut self) {
        let pressed = self.input.buttons().first_pressed();

        match pressed {
            Some(Button::Minute) => {
                self.time = self.time.increment_minute_by_one();
                self.ticks = 0;
            }
            Some(Button::Hour) => {
                self.time = self.time.increment_hour_by_one();
            }
            Some(Button::Power) | None => {}
        }

        trace!("clock: set {} ({})", self.time, pressed);
        self.refresh();
        self.state = ClockState::Ticking;
    }

    fn step_low_power(&mut self) {
        self.credit_minute();

        if self.input.power_present() {
            self.refresh();
            self.state = ClockState::Ticking;
        }
    }

    /// Turns one minute's worth of ticks into a minute.
    ///
    /// Subtracts rather than clears so ticks beyond the minute carry over.
    fn credit_minute(&mut self) -> bool {
        let per_minute = self.config.ticks_per_minute();
        if self.ticks < per_minute {
            return false;
        }

        self.ticks -= per_minute;
        self.time = self.time.advance_minute();
        trace!("clock: minute credited, now {}", self.time);
        true
    }

    fn beat_heartbeat(&mut self) {
        if self.heartbeat_phase + 1 >= self.config.heartbeat_period() {
            self.heartbeat_phase = 0;
            self.heartbeat_on = true;
        } else {
            self.heartbeat_phase += 1;
            self.heartbeat_on = false;
        }
        self.sink.set_line(IndicatorLine::Heartbeat, self.heartbeat_on);
    }

    fn poll_buttons(&mut self) {
        if self.input.buttons().any() {
            self.state = ClockState::Setting;
        }
    }

    fn refresh(&mut self) {
        let pattern = DisplayPattern::from_time(&self.time);
        self.sink.write_pattern(&pattern);
    }
}
