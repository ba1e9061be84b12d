//! GPIO pin assignments for the RF transmitter daughterboard.
//!
//! Single source of truth — the encoder driver references this module rather
//! than hard-coding pin numbers.  Change a pin here and it propagates
//! everywhere.
//!
//! Wiring: four parallel code lines into the encoder (three address bits
//! D0–D2 plus the data bit D3), an enable line that keys the ASK modulator,
//! and a mode line selecting the modulation scheme (LOW = ASK).

use core::time::Duration;

// ---------------------------------------------------------------------------
// Encoder code lines (parallel input to the encoder's shift register)
// ---------------------------------------------------------------------------

/// Address bit 0 (least significant).
pub const D0_GPIO: i32 = 17;
/// Address bit 1.
pub const D1_GPIO: i32 = 22;
/// Address bit 2 (most significant).
pub const D2_GPIO: i32 = 23;
/// Data bit: HIGH = switch the addressed socket on, LOW = off.
pub const D3_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Modulator control
// ---------------------------------------------------------------------------

/// Transmit enable: HIGH keys the carrier and the encoder streams the code.
pub const ENABLE_GPIO: i32 = 25;
/// Modulation select: LOW = ASK (OOK), HIGH = FSK.  Held LOW.
pub const MODE_GPIO: i32 = 24;

// ---------------------------------------------------------------------------
// Protocol timing
// ---------------------------------------------------------------------------
//
// These two intervals encode a hardware protocol requirement, not a tuning
// choice.  Do not shorten them: the receiver has no feedback channel, so a
// truncated transmission is simply a lost command.

/// Delay between latching a new code on D0–D3 and keying the transmitter.
/// Gives the encoder's internal shift register time to stabilise; keying
/// earlier risks the receiver sampling the leading edge of a moving signal.
pub const SETTLE_INTERVAL: Duration = Duration::from_millis(100);

/// How long the enable line is held HIGH per command.  The encoder repeats
/// the code continuously while keyed; the receiver needs several complete
/// cycles to accept a command through noise.
pub const TRANSMIT_INTERVAL: Duration = Duration::from_millis(250);
