//! Input controller task: polls two buttons, debounces them and
//! suspends/resumes the indicator and pulse tasks.
//!
//! Buttons follow the pull-up convention: the line reads low while
//! pressed. Button A governs the indicator, button B the pulse output.

use core::cell::RefCell;

use crate::log_info;
use crate::platform::{InputPin, OutputPin};
use crate::supervisor::{Task, TaskHandle, Ticks};
use crate::tasks::indicator::RgbLines;

/// Debounce state of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released; a press will act.
    Idle,
    /// Press already handled; a release will act.
    Activated,
}

/// Side effect requested by a debounce transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    Suspend,
    Resume,
}

/// One step of the per-button state machine.
///
/// A press acts exactly once on the Idle→Activated edge, a release exactly
/// once on the way back. Every other sample leaves the state unchanged,
/// which is what suppresses repeated actions while the button is held.
pub fn debounce_step(state: ButtonState, pressed: bool) -> (ButtonState, Option<ButtonAction>) {
    match (state, pressed) {
        (ButtonState::Idle, true) => (ButtonState::Activated, Some(ButtonAction::Suspend)),
        (ButtonState::Activated, false) => (ButtonState::Idle, Some(ButtonAction::Resume)),
        (state, _) => (state, None),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Input sampling period.
    pub poll_period: Ticks,
    /// Extra delay after each suspend/resume, riding out contact chatter
    /// before polling continues.
    pub settle: Ticks,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_period: 100,
            settle: 200,
        }
    }
}

pub struct ControllerTask<'a, I: InputPin, O: OutputPin> {
    button_a: I,
    button_b: I,
    indicator: TaskHandle<'a>,
    indicator_lines: &'a RefCell<RgbLines<O>>,
    pulse: TaskHandle<'a>,
    pulse_line: &'a RefCell<O>,
    state_a: ButtonState,
    state_b: ButtonState,
    config: ControllerConfig,
}

impl<'a, I: InputPin, O: OutputPin> ControllerTask<'a, I, O> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        button_a: I,
        button_b: I,
        indicator: TaskHandle<'a>,
        indicator_lines: &'a RefCell<RgbLines<O>>,
        pulse: TaskHandle<'a>,
        pulse_line: &'a RefCell<O>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            button_a,
            button_b,
            indicator,
            indicator_lines,
            pulse,
            pulse_line,
            state_a: ButtonState::Idle,
            state_b: ButtonState::Idle,
            config,
        }
    }
}

impl<I: InputPin, O: OutputPin> Task for ControllerTask<'_, I, O> {
    fn run(&mut self) -> Ticks {
        let mut sleep = self.config.poll_period;

        // Button A governs the indicator.
        let pressed = self.button_a.is_low();
        let (next, action) = debounce_step(self.state_a, pressed);
        self.state_a = next;
        match action {
            Some(ButtonAction::Suspend) => {
                log_info!("button A pressed: suspending indicator task");
                self.indicator.suspend();
                // the owner is parked now; leave its lines at the idle value
                self.indicator_lines.borrow_mut().all_off();
                sleep += self.config.settle;
            }
            Some(ButtonAction::Resume) => {
                log_info!("button A released: resuming indicator task");
                self.indicator.resume();
                sleep += self.config.settle;
            }
            None => {}
        }

        // Button B governs the pulse output, same machine, independent state.
        let pressed = self.button_b.is_low();
        let (next, action) = debounce_step(self.state_b, pressed);
        self.state_b = next;
        match action {
            Some(ButtonAction::Suspend) => {
                log_info!("button B pressed: suspending pulse task");
                self.pulse.suspend();
                self.pulse_line.borrow_mut().set_low();
                sleep += self.config.settle;
            }
            Some(ButtonAction::Resume) => {
                log_info!("button B released: resuming pulse task");
                self.pulse.resume();
                sleep += self.config.settle;
            }
            None => {}
        }

        sleep
    }
}
