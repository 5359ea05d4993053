//! Pulse task: fixed duty-cycle output, a short active burst then a long
//! idle stretch.

use core::cell::RefCell;

use crate::platform::OutputPin;
use crate::supervisor::{Task, Ticks};

#[derive(Debug, Clone, Copy)]
pub struct PulseConfig {
    /// Ticks the output stays active each period.
    pub on_ticks: Ticks,
    /// Ticks the output stays idle each period.
    pub off_ticks: Ticks,
}

impl PulseConfig {
    pub const fn period(&self) -> Ticks {
        self.on_ticks + self.off_ticks
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            on_ticks: 100,
            off_ticks: 900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Active,
    Idle,
}

pub struct PulseTask<'a, O: OutputPin> {
    line: &'a RefCell<O>,
    phase: Phase,
    config: PulseConfig,
}

impl<'a, O: OutputPin> PulseTask<'a, O> {
    pub fn new(line: &'a RefCell<O>, config: PulseConfig) -> Self {
        Self {
            line,
            phase: Phase::Active,
            config,
        }
    }
}

impl<O: OutputPin> Task for PulseTask<'_, O> {
    fn run(&mut self) -> Ticks {
        match self.phase {
            Phase::Active => {
                self.line.borrow_mut().set_high();
                self.phase = Phase::Idle;
                self.config.on_ticks
            }
            Phase::Idle => {
                self.line.borrow_mut().set_low();
                self.phase = Phase::Active;
                self.config.off_ticks
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockOutput, PinState};

    #[test]
    fn default_config_is_one_in_ten() {
        let config = PulseConfig::default();
        assert_eq!(config.on_ticks, 100);
        assert_eq!(config.period(), 1000);
    }

    #[test]
    fn phases_alternate_with_their_durations() {
        let state = PinState::new(false);
        let line = RefCell::new(MockOutput::new(&state));
        let mut task = PulseTask::new(&line, PulseConfig::default());

        assert_eq!(task.run(), 100);
        assert!(state.is_high());

        assert_eq!(task.run(), 900);
        assert!(!state.is_high());

        assert_eq!(task.run(), 100);
        assert!(state.is_high());
    }

    #[test]
    fn resumes_in_the_pending_phase() {
        let state = PinState::new(false);
        let line = RefCell::new(MockOutput::new(&state));
        let mut task = PulseTask::new(&line, PulseConfig::default());

        task.run(); // active phase written, idle phase pending

        // forced idle while suspended, as the controller would do
        line.borrow_mut().set_low();

        // the pending work unit is still the idle phase
        assert_eq!(task.run(), 900);
        assert!(!state.is_high());
    }
}
