//! Property tests for believed-state bookkeeping.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets.  On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;

use rfplug::{Delay, EncoderPins, Line, PinFault, PlugBank, PlugError, PlugId};

use std::time::Duration;

/// Always-succeeding pin layer; only believed state matters here.
struct NullPins {
    fault: Option<PinFault>,
}

impl EncoderPins for NullPins {
    fn initialize(&mut self) -> Result<(), PinFault> {
        Ok(())
    }
    fn write(&mut self, _line: Line, _high: bool) {}
    fn clear_fault(&mut self) {
        self.fault = None;
    }
    fn last_fault(&self) -> Option<PinFault> {
        self.fault
    }
}

struct InstantDelay;

impl Delay for InstantDelay {
    fn sleep(&mut self, _interval: Duration) {}
}

fn bank() -> PlugBank<NullPins, InstantDelay> {
    PlugBank::new(NullPins { fault: None }, InstantDelay).unwrap()
}

const WIRED: [PlugId; 3] = [PlugId::ALL, PlugId::ONE, PlugId::TWO];

proptest! {
    /// After any command sequence, each plug's believed state is exactly
    /// the last value commanded for it (or off if never commanded).
    #[test]
    fn believed_state_is_last_successful_command(
        ops in proptest::collection::vec((0usize..3, any::<bool>()), 0..64),
    ) {
        let bank = bank();
        let mut expected = [false; 3];

        for (idx, on) in &ops {
            bank.set(WIRED[*idx], *on).unwrap();
            expected[*idx] = *on;
        }

        for (idx, id) in WIRED.iter().enumerate() {
            prop_assert_eq!(bank.state(*id), expected[idx]);
        }
    }

    /// Raw identities outside the wired set are always rejected and never
    /// disturb the wired plugs' believed state.
    #[test]
    fn unwired_identities_always_rejected(
        raw in 3u8..=255,
        on in any::<bool>(),
    ) {
        let bank = bank();
        bank.set(PlugId::ONE, true).unwrap();

        let id = PlugId::from_raw(raw);
        prop_assert_eq!(bank.set(id, on), Err(PlugError::UnknownPlug(id)));
        prop_assert!(!bank.state(id), "unknown identity reads as off");
        prop_assert!(bank.state(PlugId::ONE), "wired plugs unaffected");
    }
}
