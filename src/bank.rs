//! Plug controller: exclusion lock, send sequence, believed state.
//!
//! One [`PlugBank`] owns the encoder pins for the life of the process and
//! serialises every write burst behind a single mutex — all plugs share the
//! same physical lines, so two commands must never interleave their bit
//! patterns.  Per wired identity the bank keeps exactly one believed-state
//! slot; handles from [`plug`](PlugBank::plug) all point at the same slot,
//! so two views of one socket cannot diverge.
//!
//! "Believed" is deliberate: the radio link is one-way.  A successful `set`
//! records what was commanded, not what the socket actually did.
//!
//! ## Send sequence
//!
//! ```text
//! lock ─ clear fault ─ write D2 D1 D0 D3 ─ settle ─ ENABLE ▔▔▔ 250ms ─ check fault
//! ```
//!
//! The two sleeps run while the lock is held.  That is intentional: the
//! encoder streams whatever is on the code lines for as long as ENABLE is
//! high, so the lines must stay frozen for the whole window.  Expect a
//! `set` to block its caller for settle + transmit (≥ 350 ms).

use std::sync::PoisonError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use core::time::Duration;

use log::{info, warn};

use crate::config::TimingConfig;
use crate::delay::Delay;
use crate::encoder::{EncoderPins, Line};
use crate::error::{PlugError, Result};
use crate::pins::{SETTLE_INTERVAL, TRANSMIT_INTERVAL};
use crate::plug::{self, PlugId};

/// Pins and delay, guarded together — a burst owns both.
struct EncoderBus<P, D> {
    pins: P,
    delay: D,
}

/// Registry of radio sockets sharing one encoder.
pub struct PlugBank<P: EncoderPins, D: Delay> {
    bus: Mutex<EncoderBus<P, D>>,
    believed: [AtomicBool; plug::WIRED.len()],
    settle: Duration,
    transmit: Duration,
}

impl<P: EncoderPins, D: Delay> PlugBank<P, D> {
    /// Build the bank with protocol-default timing and run the one-time
    /// hardware init: clear the fault latch, configure the lines, force the
    /// code lines and ENABLE low and MODE low (ASK).
    ///
    /// Fails with [`PlugError::InitFailed`] if the GPIO layer cannot be
    /// brought up — fatal to the caller, since a power controller with
    /// silently dead outputs is worse than a hard failure.
    pub fn new(pins: P, delay: D) -> Result<Self> {
        Self::with_timing(pins, delay, TimingConfig::default())
    }

    /// Like [`new`](Self::new) with deployment-specific timing.  Intervals
    /// below the protocol minimum are clamped up (never down) with a
    /// warning; see [`TimingConfig::validate`] to reject them instead.
    pub fn with_timing(pins: P, delay: D, timing: TimingConfig) -> Result<Self> {
        let mut settle = timing.settle();
        if settle < SETTLE_INTERVAL {
            warn!(
                "settle interval {}ms below protocol minimum, clamping to {}ms",
                timing.settle_ms,
                SETTLE_INTERVAL.as_millis()
            );
            settle = SETTLE_INTERVAL;
        }
        let mut transmit = timing.transmit();
        if transmit < TRANSMIT_INTERVAL {
            warn!(
                "transmit interval {}ms below protocol minimum, clamping to {}ms",
                timing.transmit_ms,
                TRANSMIT_INTERVAL.as_millis()
            );
            transmit = TRANSMIT_INTERVAL;
        }

        let mut bus = EncoderBus { pins, delay };

        bus.pins.clear_fault();
        bus.pins.initialize().map_err(PlugError::InitFailed)?;

        // Known baseline regardless of what a previous process left behind:
        // code lines zeroed, modulator off, ASK selected.
        for line in [Line::D3, Line::D2, Line::D1, Line::D0] {
            bus.pins.write(line, false);
        }
        bus.pins.write(Line::Enable, false);
        bus.pins.write(Line::Mode, false);

        if let Some(fault) = bus.pins.last_fault() {
            return Err(PlugError::InitFailed(fault));
        }

        info!(
            "plug bank ready ({} identities, settle {}ms, transmit {}ms)",
            plug::WIRED.len(),
            settle.as_millis(),
            transmit.as_millis()
        );

        Ok(Self {
            bus: Mutex::new(bus),
            believed: std::array::from_fn(|_| AtomicBool::new(false)),
            settle,
            transmit,
        })
    }

    /// Handle for a wired identity.  Handles are cheap copies; every handle
    /// for one identity shares the bank's single believed-state slot.
    pub fn plug(&self, id: PlugId) -> Result<Plug<'_, P, D>> {
        if plug::slot(id).is_none() {
            return Err(PlugError::UnknownPlug(id));
        }
        Ok(Plug { bank: self, id })
    }

    /// Command a plug on or off.
    ///
    /// Blocks for the lock plus settle + transmit.  On a latched pin fault
    /// the believed state is left untouched and the caller may retry; the
    /// bank never retries on its own — each retry is another full radio
    /// transmission, which the caller should be aware of.
    pub fn set(&self, id: PlugId, on: bool) -> Result<()> {
        // A poisoned lock means a panic elsewhere, not inconsistent pin
        // hardware; the next burst rewrites every line anyway.
        let mut bus = self.bus.lock().unwrap_or_else(PoisonError::into_inner);

        bus.pins.clear_fault();

        // Unreachable through handles; guards raw identities and whatever
        // the address table grows to.
        let Some(code) = plug::address_code(id) else {
            return Err(PlugError::UnknownPlug(id));
        };

        let [d2, d1, d0] = code;
        bus.pins.write(Line::D2, d2);
        bus.pins.write(Line::D1, d1);
        bus.pins.write(Line::D0, d0);
        bus.pins.write(Line::D3, on);

        // Let the encoder's shift register latch the new code.
        bus.delay.sleep(self.settle);

        // Key the modulator; the encoder repeats the code for the whole
        // window so the receiver can vote across several cycles.
        bus.pins.write(Line::Enable, true);
        bus.delay.sleep(self.transmit);
        bus.pins.write(Line::Enable, false);

        if let Some(fault) = bus.pins.last_fault() {
            warn!("set {id} {}: {fault}", if on { "on" } else { "off" });
            return Err(PlugError::PinWrite(fault));
        }

        // Commit belief before the guard drops: the last burst on the wire
        // and the last store must be the same call.
        if let Some(slot) = plug::slot(id) {
            self.believed[slot].store(on, Ordering::Relaxed);
        }
        Ok(())
    }

    /// Believed state of a plug — the last successfully commanded value,
    /// `false` before any command.  Lock-free; a read racing a `set` may
    /// observe the value from just before it.
    pub fn state(&self, id: PlugId) -> bool {
        plug::slot(id)
            .map(|slot| self.believed[slot].load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

/// Handle for one socket, borrowing the bank.
pub struct Plug<'a, P: EncoderPins, D: Delay> {
    bank: &'a PlugBank<P, D>,
    id: PlugId,
}

impl<P: EncoderPins, D: Delay> Plug<'_, P, D> {
    /// Switch the socket on.
    pub fn on(&self) -> Result<()> {
        self.bank.set(self.id, true)
    }

    /// Switch the socket off.
    pub fn off(&self) -> Result<()> {
        self.bank.set(self.id, false)
    }

    /// Command an explicit state.
    pub fn set(&self, on: bool) -> Result<()> {
        self.bank.set(self.id, on)
    }

    /// Believed state.
    pub fn is_on(&self) -> bool {
        self.bank.state(self.id)
    }

    pub fn id(&self) -> PlugId {
        self.id
    }
}

impl<P: EncoderPins, D: Delay> Clone for Plug<'_, P, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: EncoderPins, D: Delay> Copy for Plug<'_, P, D> {}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;
    use crate::gpio::BoardEncoder;

    struct InstantDelay;

    impl Delay for InstantDelay {
        fn sleep(&mut self, _interval: Duration) {}
    }

    #[test]
    fn init_leaves_all_lines_low() {
        let bank = PlugBank::new(BoardEncoder::new(), InstantDelay).unwrap();
        let bus = bank.bus.lock().unwrap();
        for line in Line::ALL {
            assert!(!bus.pins.level(line), "{line} should be low after init");
        }
    }

    #[test]
    fn plug_one_on_drives_all_four_code_lines_high() {
        let bank = PlugBank::new(BoardEncoder::new(), InstantDelay).unwrap();
        bank.set(PlugId::ONE, true).unwrap();

        let bus = bank.bus.lock().unwrap();
        assert!(bus.pins.level(Line::D2));
        assert!(bus.pins.level(Line::D1));
        assert!(bus.pins.level(Line::D0));
        assert!(bus.pins.level(Line::D3));
        // Modulator back off after the pulse window.
        assert!(!bus.pins.level(Line::Enable));
        drop(bus);
        assert!(bank.state(PlugId::ONE));
    }

    #[test]
    fn broadcast_address_pattern() {
        let bank = PlugBank::new(BoardEncoder::new(), InstantDelay).unwrap();
        bank.set(PlugId::ALL, false).unwrap();

        let bus = bank.bus.lock().unwrap();
        assert!(!bus.pins.level(Line::D2)); // 011
        assert!(bus.pins.level(Line::D1));
        assert!(bus.pins.level(Line::D0));
        assert!(!bus.pins.level(Line::D3)); // off
    }

    #[test]
    fn handle_for_unknown_identity_is_rejected() {
        let bank = PlugBank::new(BoardEncoder::new(), InstantDelay).unwrap();
        assert_eq!(
            bank.plug(PlugId::from_raw(9)).err(),
            Some(PlugError::UnknownPlug(PlugId::from_raw(9)))
        );
    }
}
