//! Platform interface traits
//!
//! All operations are infallible: the targets this demo supports expose
//! pins that cannot fail once configured, and any deeper hardware fault is
//! the platform implementation's problem, not the core's.

use crate::supervisor::Ticks;

/// A single output signal line.
pub trait OutputPin {
    /// Drive the line to its active level.
    fn set_high(&mut self);

    /// Drive the line to its idle level.
    fn set_low(&mut self);

    /// Drive the line from a boolean.
    fn set_state(&mut self, active: bool) {
        if active {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// A single input signal line.
pub trait InputPin {
    /// Electrical level of the line.
    fn is_high(&mut self) -> bool;

    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Realizes logical supervisor ticks as wall time.
pub trait Delay {
    fn delay_ticks(&mut self, ticks: Ticks);
}
