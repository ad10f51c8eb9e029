//! Pin map of the reference board and port-level adapters.
//!
//! The reference board drives its indicators from three 8-bit GPIO ports:
//!
//! ```text
//! P1: x  x  x  x  m0 m1 m2 m3
//! P2: x  x  PW m4 m5 h3 B0 x
//! P3: B1 B2 PM TK x  h0 h1 h2
//! ```
//!
//! `mN`/`hN` are minute/hour bits, `PM` the meridiem line, `TK` the heartbeat,
//! `B0..B2` the active-low buttons and `PW` the power-present indicator.
//!
//! [`PortSink`] turns a display refresh into one masked write per port, and
//! [`PortInputs`] decodes raw port levels into button and power samples. Both
//! sit on the small [`PortWriter`]/[`PortReader`] traits so any HAL can back
//! them.

use crate::display::{DisplayPattern, IndicatorLine, OutputSink};
use crate::input::{ButtonSample, InputSource};
use crate::types::Button;

/// One 8-bit GPIO port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Minute bits 0..=3.
    P1,
    /// Hour bit 3, minute bits 4 and 5, power button and power indicator.
    P2,
    /// Hour bits 0..=2, meridiem, heartbeat, minute and hour buttons.
    P3,
}

impl Port {
    /// All ports, in write order.
    pub const ALL: [Port; 3] = [Port::P1, Port::P2, Port::P3];

    /// Bits on this port that belong to the time display.
    ///
    /// The heartbeat bit is excluded so a refresh leaves it alone.
    pub const fn display_mask(self) -> u8 {
        match self {
            Port::P1 => 0x0F,
            Port::P2 => 0x1C,
            Port::P3 => 0x27,
        }
    }
}

/// Port and bit mask driving `line`, or `None` for bit numbers the board
/// does not have.
pub const fn output_pin(line: IndicatorLine) -> Option<(Port, u8)> {
    let pin = match line {
        IndicatorLine::Hour(0) => (Port::P3, 0x04),
        IndicatorLine::Hour(1) => (Port::P3, 0x02),
        IndicatorLine::Hour(2) => (Port::P3, 0x01),
        IndicatorLine::Hour(3) => (Port::P2, 0x04),
        IndicatorLine::Minute(0) => (Port::P1, 0x08),
        IndicatorLine::Minute(1) => (Port::P1, 0x04),
        IndicatorLine::Minute(2) => (Port::P1, 0x02),
        IndicatorLine::Minute(3) => (Port::P1, 0x01),
        IndicatorLine::Minute(4) => (Port::P2, 0x10),
        IndicatorLine::Minute(5) => (Port::P2, 0x08),
        IndicatorLine::Meridiem => (Port::P3, 0x20),
        IndicatorLine::Heartbeat => (Port::P3, 0x10),
        IndicatorLine::Hour(_) | IndicatorLine::Minute(_) => return None,
    };
    Some(pin)
}

/// Port and bit mask reading `button`. Buttons pull the pin low when held.
pub const fn button_pin(button: Button) -> (Port, u8) {
    match button {
        Button::Power => (Port::P2, 0x02),
        Button::Minute => (Port::P3, 0x80),
        Button::Hour => (Port::P3, 0x40),
    }
}

/// Port and bit mask of the power indicator. High while main power is present.
pub const POWER_PRESENT_PIN: (Port, u8) = (Port::P2, 0x20);

/// Display bits of all three ports for one [`DisplayPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortImage {
    ports: [u8; 3],
}

impl PortImage {
    /// Packs a pattern into port bits.
    pub fn from_pattern(pattern: &DisplayPattern) -> Self {
        let mut ports = [0u8; 3];
        for (line, on) in pattern.iter() {
            if let (true, Some((port, mask))) = (on, output_pin(line)) {
                ports[port as usize] |= mask;
            }
        }
        Self { ports }
    }

    /// Display bits for `port`. Always within [`Port::display_mask`].
    #[inline]
    pub fn value(&self, port: Port) -> u8 {
        self.ports[port as usize]
    }
}

/// Masked port output, e.g. a read-modify-write of a `PxOUT` register.
pub trait PortWriter {
    /// Sets the bits of `port` selected by `mask` to those in `bits`,
    /// leaving the rest as they are.
    fn modify(&mut self, port: Port, mask: u8, bits: u8);
}

/// Raw port input, e.g. a read of a `PxIN` register.
pub trait PortReader {
    /// Reads the current level of every pin on `port`.
    fn read(&self, port: Port) -> u8;
}

/// [`OutputSink`] over the reference board's ports.
pub struct PortSink<W: PortWriter> {
    writer: W,
}

impl<W: PortWriter> PortSink<W> {
    /// Wraps a port writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the port writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwraps the port writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: PortWriter> OutputSink for PortSink<W> {
    fn set_line(&mut self, line: IndicatorLine, on: bool) {
        if let Some((port, mask)) = output_pin(line) {
            self.writer.modify(port, mask, if on { mask } else { 0 });
        }
    }

    fn write_pattern(&mut self, pattern: &DisplayPattern) {
        let image = PortImage::from_pattern(pattern);
        for port in Port::ALL {
            self.writer.modify(port, port.display_mask(), image.value(port));
        }
    }
}

/// [`InputSource`] over the reference board's ports.
pub struct PortInputs<R: PortReader> {
    reader: R,
}

impl<R: PortReader> PortInputs<R> {
    /// Wraps a port reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Returns the port reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }
}

impl<R: PortReader> InputSource for PortInputs<R> {
    fn buttons(&self) -> ButtonSample {
        let p2 = self.reader.read(Port::P2);
        let p3 = self.reader.read(Port::P3);
        let level = |button: Button| {
            let (port, mask) = button_pin(button);
            let value = if port == Port::P2 { p2 } else { p3 };
            value & mask != 0
        };
        ButtonSample::from_active_low([
            level(Button::Power),
            level(Button::Minute),
            level(Button::Hour),
        ])
    }

    fn power_present(&self) -> bool {
        let (port, mask) = POWER_PRESENT_PIN;
        self.reader.read(port) & mask != 0
    }
}
