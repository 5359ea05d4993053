//! Mock platform implementations for host tests
//!
//! Pin state is kept in [`PinState`] cells owned by the test harness, so a
//! line stays observable (and drivable, for inputs) after its pin half has
//! been handed to a task.

use core::cell::Cell;

use crate::platform::{Delay, InputPin, OutputPin};
use crate::supervisor::Ticks;

/// Backing store for one simulated signal line.
#[derive(Debug)]
pub struct PinState {
    level: Cell<bool>,
}

impl PinState {
    pub const fn new(level: bool) -> Self {
        Self {
            level: Cell::new(level),
        }
    }

    /// Current electrical level of the line.
    pub fn is_high(&self) -> bool {
        self.level.get()
    }

    /// Drive the line from the test side, simulating an external signal.
    pub fn drive(&self, high: bool) {
        self.level.set(high);
    }
}

/// Mock output pin writing into a shared [`PinState`].
#[derive(Debug)]
pub struct MockOutput<'a> {
    state: &'a PinState,
}

impl<'a> MockOutput<'a> {
    pub fn new(state: &'a PinState) -> Self {
        Self { state }
    }
}

impl OutputPin for MockOutput<'_> {
    fn set_high(&mut self) {
        self.state.level.set(true);
    }

    fn set_low(&mut self) {
        self.state.level.set(false);
    }
}

/// Mock input pin reading from a shared [`PinState`].
#[derive(Debug)]
pub struct MockInput<'a> {
    state: &'a PinState,
}

impl<'a> MockInput<'a> {
    pub fn new(state: &'a PinState) -> Self {
        Self { state }
    }
}

impl InputPin for MockInput<'_> {
    fn is_high(&mut self) -> bool {
        self.state.level.get()
    }
}

/// Delay that only accounts for time; the supervisor's logical clock does
/// the actual advancing in host tests.
#[derive(Debug, Default)]
pub struct MockDelay {
    slept: Ticks,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total ticks slept since creation.
    pub fn total_slept(&self) -> Ticks {
        self.slept
    }
}

impl Delay for MockDelay {
    fn delay_ticks(&mut self, ticks: Ticks) {
        self.slept += ticks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_pin_drives_shared_state() {
        let state = PinState::new(false);
        let mut pin = MockOutput::new(&state);
        assert!(!state.is_high());

        pin.set_high();
        assert!(state.is_high());

        pin.set_low();
        assert!(!state.is_high());

        pin.set_state(true);
        assert!(state.is_high());
    }

    #[test]
    fn input_pin_follows_external_drive() {
        let state = PinState::new(true);
        let mut pin = MockInput::new(&state);
        assert!(pin.is_high());
        assert!(!pin.is_low());

        state.drive(false);
        assert!(pin.is_low());
    }

    #[test]
    fn delay_accumulates() {
        let mut delay = MockDelay::new();
        delay.delay_ticks(100);
        delay.delay_ticks(250);
        assert_eq!(delay.total_slept(), 350);
    }
}
