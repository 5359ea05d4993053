#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{info, unwrap};
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use {defmt_rtt as _, panic_halt as _};

use nrf52840_dk_supervisor::platform::hal::{HalInput, HalOutput};
use nrf52840_dk_supervisor::platform::nrf52840::TickDelay;
use nrf52840_dk_supervisor::supervisor::{Supervisor, TaskControl};
use nrf52840_dk_supervisor::tasks::{
    ControllerConfig, ControllerTask, IndicatorConfig, IndicatorTask, PulseConfig, PulseTask,
    RgbLines,
};

/// Indicator and pulse share a base priority; the controller sits above
/// them so button samples are never delayed behind their sleeps.
const PRIORITY_PERIPHERAL: u8 = 1;
const PRIORITY_CONTROLLER: u8 = 2;

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("=== nRF52840-DK task supervisor demo ===");

    let p = embassy_nrf::init(Default::default());

    // LEDs are active low on the DK, as are the buttons (internal pull-ups).
    // LED1-LED3 play the RGB indicator, LED4 stands in for the buzzer.
    let red = HalOutput::active_low(Output::new(p.P0_13, Level::High, OutputDrive::Standard));
    let green = HalOutput::active_low(Output::new(p.P0_14, Level::High, OutputDrive::Standard));
    let blue = HalOutput::active_low(Output::new(p.P0_15, Level::High, OutputDrive::Standard));
    let buzzer = HalOutput::active_low(Output::new(p.P0_16, Level::High, OutputDrive::Standard));
    let button_a = HalInput::new(Input::new(p.P0_11, Pull::Up));
    let button_b = HalInput::new(Input::new(p.P0_12, Pull::Up));
    info!("GPIO configured");

    let indicator_lines = RefCell::new(RgbLines::new(red, green, blue));
    let pulse_line = RefCell::new(buzzer);

    let indicator_control = TaskControl::new();
    let pulse_control = TaskControl::new();
    let controller_control = TaskControl::new();

    let mut indicator = IndicatorTask::new(&indicator_lines, IndicatorConfig::default());
    let mut pulse = PulseTask::new(&pulse_line, PulseConfig::default());

    let mut supervisor: Supervisor<'_, 3> = Supervisor::new();
    let indicator_handle = unwrap!(supervisor.create(
        "indicator",
        PRIORITY_PERIPHERAL,
        &indicator_control,
        &mut indicator
    ));
    let pulse_handle = unwrap!(supervisor.create(
        "pulse",
        PRIORITY_PERIPHERAL,
        &pulse_control,
        &mut pulse
    ));

    let mut controller = ControllerTask::new(
        button_a,
        button_b,
        indicator_handle,
        &indicator_lines,
        pulse_handle,
        &pulse_line,
        ControllerConfig::default(),
    );
    unwrap!(supervisor.create(
        "buttons",
        PRIORITY_CONTROLLER,
        &controller_control,
        &mut controller
    ));

    info!("all tasks created, starting supervisor");
    supervisor.start(&mut TickDelay)
}
