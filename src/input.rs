//! Button and power inputs.

use crate::types::Button;

/// One sample of the three buttons. `true` means the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pressed: [bool; 3],
}

impl ButtonSample {
    /// No button held.
    pub const NONE: ButtonSample = ButtonSample {
        pressed: [false; 3],
    };

    /// Creates a sample from asserted states, indexed by [`Button::index`].
    #[inline]
    pub const fn new(pressed: [bool; 3]) -> Self {
        Self { pressed }
    }

    /// Creates a sample from pin levels of active-low buttons.
    ///
    /// A low level (`false`) means the button is held.
    #[inline]
    pub const fn from_active_low(levels: [bool; 3]) -> Self {
        Self {
            pressed: [!levels[0], !levels[1], !levels[2]],
        }
    }

    /// Sample with only `button` held.
    pub const fn only(button: Button) -> Self {
        let mut pressed = [false; 3];
        pressed[button.index()] = true;
        Self { pressed }
    }

    /// Returns this sample with `button` also held.
    pub const fn with(mut self, button: Button) -> Self {
        self.pressed[button.index()] = true;
        self
    }

    /// Returns true if `button` is held.
    #[inline]
    pub const fn is_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    /// Returns true if any button is held.
    #[inline]
    pub const fn any(&self) -> bool {
        self.pressed[0] || self.pressed[1] || self.pressed[2]
    }

    /// The held button that takes effect: Power, then Minute, then Hour.
    pub fn first_pressed(&self) -> Option<Button> {
        Button::ALL
            .iter()
            .copied()
            .find(|button| self.is_pressed(*button))
    }
}

/// Trait for abstracting the clock's inputs.
///
/// Inputs are sampled once per step; sampling at the step rate is what
/// debounces the buttons. Takes `&self` so a source can be shared with other
/// code. Use interior mutability if reading needs it.
pub trait InputSource {
    /// Samples the three buttons.
    fn buttons(&self) -> ButtonSample;

    /// Returns true while main power is present.
    fn power_present(&self) -> bool;
}

impl<S: InputSource + ?Sized> InputSource for &S {
    fn buttons(&self) -> ButtonSample {
        (**self).buttons()
    }

    fn power_present(&self) -> bool {
        (**self).power_present()
    }
}
