//! RF plug controller.
//!
//! Drives radio-controlled mains sockets through six GPIO lines wired to an
//! ASK encoder: a 3-bit address selects the socket, a data bit carries
//! on/off, and an enable line keys the transmitter for a fixed window.
//!
//! ```no_run
//! use rfplug::{BoardEncoder, PlugBank, PlugId, SystemDelay};
//!
//! # fn main() -> rfplug::Result<()> {
//! let bank = PlugBank::new(BoardEncoder::new(), SystemDelay)?;
//! let lamp = bank.plug(PlugId::ONE)?;
//! lamp.on()?;
//! assert!(lamp.is_on());
//! # Ok(())
//! # }
//! ```
//!
//! The link is one-way — `is_on` reports the last commanded state, not a
//! measured one.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]`; on other targets the board driver runs
//! an in-memory simulation so the crate builds and tests on the host.

#![deny(unused_must_use)]

pub mod bank;
pub mod config;
pub mod delay;
pub mod encoder;
pub mod gpio;
pub mod hal;
pub mod pins;
pub mod plug;

mod error;

pub use bank::{Plug, PlugBank};
pub use config::TimingConfig;
pub use delay::{Delay, SystemDelay};
pub use encoder::{EncoderPins, Line, PinFault};
pub use error::{PlugError, Result};
pub use gpio::BoardEncoder;
pub use hal::HalEncoder;
pub use plug::PlugId;
