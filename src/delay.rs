//! Time port for the protocol delays.
//!
//! The settle and transmit intervals are real hardware timing, not
//! incidental latency — production code blocks the calling thread for them
//! while the exclusion lock is held.  Tests inject a recording fake so the
//! timing contract can be asserted without waiting it out.

use core::time::Duration;

/// Blocking delay port.
pub trait Delay {
    /// Block the calling thread for `interval`.
    fn sleep(&mut self, interval: Duration);
}

/// Wall-clock delay via `std::thread::sleep`.
///
/// On ESP-IDF, `std::thread::sleep` maps to `vTaskDelay`, yielding the
/// FreeRTOS task for the interval.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDelay;

impl Delay for SystemDelay {
    fn sleep(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}
