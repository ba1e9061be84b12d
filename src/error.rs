//! Unified error types for the plug controller.
//!
//! A single `PlugError` enum that every failure path funnels into, keeping
//! caller-side handling uniform.  All variants are `Copy` so they pass
//! through retry loops and log sites without allocation.

use core::fmt;

use crate::encoder::PinFault;
use crate::plug::PlugId;

/// Every fallible plug operation returns this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlugError {
    /// One-shot GPIO initialisation failed.  Fatal: no plug control is
    /// possible and the process should not pretend otherwise.
    InitFailed(PinFault),
    /// The identity has no entry in the encoder address table.  Caller
    /// error; no pins were touched and other plugs are unaffected.
    UnknownPlug(PlugId),
    /// The pin driver latched a fault during the write burst.  Believed
    /// state is unchanged; the caller may retry.
    PinWrite(PinFault),
}

impl fmt::Display for PlugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitFailed(fault) => write!(f, "GPIO init failed: {fault}"),
            Self::UnknownPlug(id) => write!(f, "{id} is not a wired plug identity"),
            Self::PinWrite(fault) => write!(f, "pin write failed: {fault}"),
        }
    }
}

impl std::error::Error for PlugError {}

impl From<PinFault> for PlugError {
    fn from(fault: PinFault) -> Self {
        Self::PinWrite(fault)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, PlugError>;
