//! Bridge from `embedded-hal` 1.0 digital pins to the platform traits.
//!
//! Only infallible pins are accepted (`Error = Infallible`), which is what
//! every supported target provides; the bridge is therefore panic-free.
//! Output polarity is resolved here so the tasks can think in logical
//! levels while boards with active-low wiring (the DK's LEDs) still work.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin as HalInputPin, OutputPin as HalOutputPin};

use crate::platform::{InputPin, OutputPin};

/// Output adapter with configurable polarity.
#[derive(Debug)]
pub struct HalOutput<P> {
    pin: P,
    active_low: bool,
}

impl<P> HalOutput<P>
where
    P: HalOutputPin<Error = Infallible>,
{
    /// Logical high drives the pin high.
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Logical high drives the pin low (LEDs wired to VDD, open-drain loads).
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }
}

impl<P> OutputPin for HalOutput<P>
where
    P: HalOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        let _ = if self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
    }

    fn set_low(&mut self) {
        let _ = if self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

/// Input adapter; reports the electrical level unchanged.
#[derive(Debug)]
pub struct HalInput<P> {
    pin: P,
}

impl<P> HalInput<P>
where
    P: HalInputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> InputPin for HalInput<P>
where
    P: HalInputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_hal::digital::ErrorType;

    /// Minimal embedded-hal pin over an externally observable level.
    #[derive(Debug)]
    struct Wire<'a> {
        level: &'a Cell<bool>,
    }

    impl ErrorType for Wire<'_> {
        type Error = Infallible;
    }

    impl HalOutputPin for Wire<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level.set(true);
            Ok(())
        }
    }

    impl HalInputPin for Wire<'_> {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level.get())
        }
    }

    #[test]
    fn active_high_passes_through() {
        let level = Cell::new(false);
        let mut out = HalOutput::active_high(Wire { level: &level });
        out.set_high();
        assert!(level.get());
        out.set_low();
        assert!(!level.get());
    }

    #[test]
    fn active_low_inverts() {
        let level = Cell::new(false);
        let mut out = HalOutput::active_low(Wire { level: &level });
        out.set_high();
        assert!(!level.get());
        out.set_low();
        assert!(level.get());
    }

    #[test]
    fn input_reports_electrical_level() {
        let level = Cell::new(true);
        let mut input = HalInput::new(Wire { level: &level });
        assert!(input.is_high());
        level.set(false);
        assert!(input.is_low());
    }
}
