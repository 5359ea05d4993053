//! Indicator task: cycles an RGB output Red→Green→Blue on a fixed period.

use core::cell::RefCell;

use crate::platform::OutputPin;
use crate::supervisor::{Task, Ticks};

/// Indicator color. Exactly one of the three lines is driven per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Total cycle transition: Red→Green→Blue→Red.
    pub const fn next(self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IndicatorConfig {
    /// Ticks each color stays lit.
    pub period: Ticks,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self { period: 500 }
    }
}

/// The three output lines of the indicator.
///
/// Shared behind a `RefCell` with the controller, which forces the lines
/// off when it suspends the indicator. The owner is not running at that
/// point, so there is never more than one active writer.
#[derive(Debug)]
pub struct RgbLines<O: OutputPin> {
    red: O,
    green: O,
    blue: O,
}

impl<O: OutputPin> RgbLines<O> {
    pub fn new(red: O, green: O, blue: O) -> Self {
        Self { red, green, blue }
    }

    /// Drive the line for `color` high and the other two low.
    pub fn show(&mut self, color: Color) {
        let (red, green, blue) = match color {
            Color::Red => (true, false, false),
            Color::Green => (false, true, false),
            Color::Blue => (false, false, true),
        };
        self.red.set_state(red);
        self.green.set_state(green);
        self.blue.set_state(blue);
    }

    /// Idle value: all lines off.
    pub fn all_off(&mut self) {
        self.red.set_low();
        self.green.set_low();
        self.blue.set_low();
    }
}

pub struct IndicatorTask<'a, O: OutputPin> {
    lines: &'a RefCell<RgbLines<O>>,
    color: Color,
    config: IndicatorConfig,
}

impl<'a, O: OutputPin> IndicatorTask<'a, O> {
    pub fn new(lines: &'a RefCell<RgbLines<O>>, config: IndicatorConfig) -> Self {
        Self {
            lines,
            color: Color::Red,
            config,
        }
    }
}

impl<O: OutputPin> Task for IndicatorTask<'_, O> {
    fn run(&mut self) -> Ticks {
        self.lines.borrow_mut().show(self.color);
        self.color = self.color.next();
        self.config.period
    }
}
