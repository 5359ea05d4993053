//! The three demo tasks: indicator, pulse and input controller.

pub mod controller;
pub mod indicator;
pub mod pulse;

pub use controller::{debounce_step, ButtonAction, ButtonState, ControllerConfig, ControllerTask};
pub use indicator::{Color, IndicatorConfig, IndicatorTask, RgbLines};
pub use pulse::{PulseConfig, PulseTask};
