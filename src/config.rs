//! Transmission timing configuration.
//!
//! The protocol constants in [`pins`](crate::pins) are the floor, not a
//! suggestion: a deployment in a noisy RF environment may lengthen either
//! interval, but shortening them below the protocol minimum loses commands.
//! [`TimingConfig::validate`] enforces that.

use serde::{Deserialize, Serialize};

use core::time::Duration;

use crate::pins;

/// Tunable send-sequence timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Encoder settle time after latching a new code (milliseconds).
    pub settle_ms: u32,
    /// Enable-high transmit window (milliseconds).
    pub transmit_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: pins::SETTLE_INTERVAL.as_millis() as u32,
            transmit_ms: pins::TRANSMIT_INTERVAL.as_millis() as u32,
        }
    }
}

impl TimingConfig {
    /// Reject intervals below the protocol minimums.
    pub fn validate(&self) -> Result<(), &'static str> {
        if u128::from(self.settle_ms) < pins::SETTLE_INTERVAL.as_millis() {
            return Err("settle_ms below protocol minimum");
        }
        if u128::from(self.transmit_ms) < pins::TRANSMIT_INTERVAL.as_millis() {
            return Err("transmit_ms below protocol minimum");
        }
        Ok(())
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(u64::from(self.settle_ms))
    }

    pub fn transmit(&self) -> Duration {
        Duration::from_millis(u64::from(self.transmit_ms))
    }
}
