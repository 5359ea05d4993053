#![cfg_attr(not(test), no_std)]

//! Cooperative task-supervisor demo for the nRF52840-DK.
//!
//! Three tasks (an RGB color-cycling indicator, a periodic buzzer pulse
//! and a button-polling controller) run under a small preemptive
//! priority scheduler. The controller suspends and resumes the other two
//! tasks from the board buttons, forcing their outputs to a safe idle
//! value while they are stopped.
//!
//! The library is hardware-independent and tests on the host against the
//! mock platform; the `nrf52840` feature adds the board glue used by the
//! `supervisor_app` binary.

pub mod logging;
pub mod platform;
pub mod supervisor;
pub mod tasks;
