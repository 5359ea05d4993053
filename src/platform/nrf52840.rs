//! nRF52840 board glue: tick delay backed by the embassy time driver.

use embassy_time::Duration;

use crate::platform::Delay;
use crate::supervisor::Ticks;

/// Blocking delay over the RTC time driver. One supervisor tick is one
/// millisecond of wall time.
#[derive(Debug)]
pub struct TickDelay;

impl Delay for TickDelay {
    fn delay_ticks(&mut self, ticks: Ticks) {
        embassy_time::block_for(Duration::from_millis(ticks));
    }
}
