//! Pin-boundary port trait for the RF encoder.
//!
//! ```text
//!   PlugBank (domain) ──▶ EncoderPins ──▶ board / HAL driver
//! ```
//!
//! The domain core never touches GPIO registers directly; it drives the six
//! encoder lines through this trait.  Concrete implementations live in
//! [`gpio`](crate::gpio) (raw ESP-IDF with a host simulation fallback) and
//! [`hal`](crate::hal) (generic over `embedded-hal` output pins).
//!
//! ## Latched-fault contract
//!
//! Line writes are fire-and-forget: [`EncoderPins::write`] returns nothing.
//! A failing write instead latches a sticky [`PinFault`] on the driver.  The
//! caller clears the latch once before a burst of writes and inspects it
//! once after, rather than checking every individual write — a whole send
//! sequence either went out clean or it didn't.  The first fault in a burst
//! wins; later writes still execute so the lines are left in a defined
//! state.

use core::fmt;

/// The six digital lines wired from the SoC to the encoder / modulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Address bit 0.
    D0,
    /// Address bit 1.
    D1,
    /// Address bit 2.
    D2,
    /// Data bit (on/off).
    D3,
    /// Transmit enable — keys the ASK carrier while HIGH.
    Enable,
    /// Modulation select — held LOW for ASK.
    Mode,
}

impl Line {
    /// Every line, in initialisation order (code lines first, then control).
    pub const ALL: [Line; 6] = [
        Line::D3,
        Line::D2,
        Line::D1,
        Line::D0,
        Line::Enable,
        Line::Mode,
    ];
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::D0 => write!(f, "D0"),
            Self::D1 => write!(f, "D1"),
            Self::D2 => write!(f, "D2"),
            Self::D3 => write!(f, "D3"),
            Self::Enable => write!(f, "ENABLE"),
            Self::Mode => write!(f, "MODE"),
        }
    }
}

/// A latched pin-driver fault.
///
/// `rc` is the underlying driver's return code where one exists (ESP-IDF
/// `esp_err_t`); implementations without numeric codes use `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFault {
    /// A level write on an already-configured output line was rejected.
    WriteFailed { line: Line, rc: i32 },
    /// Direction / pull configuration of a line was rejected during init.
    ConfigFailed { line: Line, rc: i32 },
}

impl fmt::Display for PinFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { line, rc } => write!(f, "{line} write failed (rc={rc})"),
            Self::ConfigFailed { line, rc } => write!(f, "{line} config failed (rc={rc})"),
        }
    }
}

/// Driver-side port: the six encoder lines plus the latched-fault protocol.
pub trait EncoderPins {
    /// One-time hardware setup of all six lines as outputs, driven LOW.
    ///
    /// Not guaranteed idempotent — callers invoke it at most once per
    /// process, before any [`write`](Self::write).
    fn initialize(&mut self) -> Result<(), PinFault>;

    /// Drive a line HIGH (`true`) or LOW (`false`).
    ///
    /// Fire-and-forget: a failure latches a fault instead of returning one.
    fn write(&mut self, line: Line, high: bool);

    /// Reset the latched fault before a new burst of writes.
    fn clear_fault(&mut self);

    /// The fault latched since the last [`clear_fault`](Self::clear_fault),
    /// if any.
    fn last_fault(&self) -> Option<PinFault>;
}
