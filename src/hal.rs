//! Generic `embedded-hal` encoder adapter.
//!
//! [`HalEncoder`] implements [`EncoderPins`] over any six
//! [`OutputPin`]s, so the controller can ride on whatever HAL the board
//! support crate provides instead of raw register access.  Pin driver
//! errors carry no portable numeric code; they are logged with their
//! `Debug` form and latched with `rc = -1`.

use embedded_hal::digital::{OutputPin, PinState};
use log::warn;

use crate::encoder::{EncoderPins, Line, PinFault};

/// Six HAL output pins wired to the encoder / modulator.
pub struct HalEncoder<O: OutputPin> {
    d0: O,
    d1: O,
    d2: O,
    d3: O,
    enable: O,
    mode: O,
    fault: Option<PinFault>,
}

impl<O: OutputPin> HalEncoder<O> {
    pub fn new(d0: O, d1: O, d2: O, d3: O, enable: O, mode: O) -> Self {
        Self {
            d0,
            d1,
            d2,
            d3,
            enable,
            mode,
            fault: None,
        }
    }

    fn pin(&mut self, line: Line) -> &mut O {
        match line {
            Line::D0 => &mut self.d0,
            Line::D1 => &mut self.d1,
            Line::D2 => &mut self.d2,
            Line::D3 => &mut self.d3,
            Line::Enable => &mut self.enable,
            Line::Mode => &mut self.mode,
        }
    }

    fn drive(&mut self, line: Line, high: bool) -> Result<(), PinFault> {
        let state = if high { PinState::High } else { PinState::Low };
        self.pin(line).set_state(state).map_err(|e| {
            warn!("hal: {line} write failed: {e:?}");
            PinFault::WriteFailed { line, rc: -1 }
        })
    }
}

impl<O: OutputPin> EncoderPins for HalEncoder<O> {
    fn initialize(&mut self) -> Result<(), PinFault> {
        for line in Line::ALL {
            self.drive(line, false)
                .map_err(|_| PinFault::ConfigFailed { line, rc: -1 })?;
        }
        Ok(())
    }

    fn write(&mut self, line: Line, high: bool) {
        if let Err(fault) = self.drive(line, high) {
            if self.fault.is_none() {
                self.fault = Some(fault);
            }
        }
    }

    fn clear_fault(&mut self) {
        self.fault = None;
    }

    fn last_fault(&self) -> Option<PinFault> {
        self.fault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::convert::Infallible;

    /// Minimal always-succeeding pin for exercising the adapter.
    #[derive(Default)]
    struct StubPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for StubPin {
        type Error = Infallible;
    }

    impl OutputPin for StubPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    fn encoder() -> HalEncoder<StubPin> {
        HalEncoder::new(
            StubPin::default(),
            StubPin::default(),
            StubPin::default(),
            StubPin::default(),
            StubPin::default(),
            StubPin::default(),
        )
    }

    #[test]
    fn initialize_drives_all_low() {
        let mut enc = encoder();
        enc.d3.high = true;
        enc.enable.high = true;

        enc.initialize().unwrap();
        assert!(!enc.d0.high && !enc.d1.high && !enc.d2.high && !enc.d3.high);
        assert!(!enc.enable.high && !enc.mode.high);
    }

    #[test]
    fn writes_route_to_the_right_pin() {
        let mut enc = encoder();
        enc.write(Line::D2, true);
        enc.write(Line::Enable, true);
        enc.write(Line::Enable, false);

        assert!(enc.d2.high);
        assert!(!enc.enable.high);
        assert_eq!(enc.last_fault(), None);
    }
}
