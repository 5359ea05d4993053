//! Hardware abstraction consumed by the supervisor and tasks.
//!
//! The core only ever talks to the three traits in [`traits`]; everything
//! pin- or timer-specific lives behind them. [`mock`] provides host-test
//! doubles, [`hal`] bridges any `embedded-hal` digital pin, and
//! [`nrf52840`] supplies the board tick delay.

pub mod hal;
pub mod mock;
pub mod traits;

#[cfg(feature = "nrf52840")]
pub mod nrf52840;

pub use traits::{Delay, InputPin, OutputPin};
