//! Board encoder driver — raw ESP-IDF GPIO with a host simulation fallback.
//!
//! Implements [`EncoderPins`] over the six lines in [`pins`](crate::pins)
//! using direct `gpio_config` / `gpio_set_level` sys calls.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO registers.
//! On host/test: tracks line levels in-memory and traces writes at `debug`.
//!
//! The latched fault is an explicit field on the driver, not ambient global
//! state; the first fault after a clear wins.

use log::{info, warn};

#[cfg(not(target_os = "espidf"))]
use log::debug;

use crate::encoder::{EncoderPins, Line, PinFault};
use crate::pins;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// GPIO number carrying a line.
const fn gpio_of(line: Line) -> i32 {
    match line {
        Line::D0 => pins::D0_GPIO,
        Line::D1 => pins::D1_GPIO,
        Line::D2 => pins::D2_GPIO,
        Line::D3 => pins::D3_GPIO,
        Line::Enable => pins::ENABLE_GPIO,
        Line::Mode => pins::MODE_GPIO,
    }
}

#[cfg(not(target_os = "espidf"))]
const fn level_index(line: Line) -> usize {
    match line {
        Line::D0 => 0,
        Line::D1 => 1,
        Line::D2 => 2,
        Line::D3 => 3,
        Line::Enable => 4,
        Line::Mode => 5,
    }
}

/// The transmitter daughterboard's six lines.
pub struct BoardEncoder {
    fault: Option<PinFault>,
    #[cfg(not(target_os = "espidf"))]
    levels: [bool; 6],
}

impl BoardEncoder {
    pub fn new() -> Self {
        Self {
            fault: None,
            #[cfg(not(target_os = "espidf"))]
            levels: [false; 6],
        }
    }

    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    fn latch(&mut self, fault: PinFault) {
        if self.fault.is_none() {
            warn!("gpio: latched fault: {fault}");
            self.fault = Some(fault);
        }
    }

    /// Simulated line level, for host-side inspection.
    #[cfg(not(target_os = "espidf"))]
    pub fn level(&self, line: Line) -> bool {
        self.levels[level_index(line)]
    }
}

impl Default for BoardEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "espidf")]
impl EncoderPins for BoardEncoder {
    fn initialize(&mut self) -> Result<(), PinFault> {
        for line in Line::ALL {
            let pin = gpio_of(line);
            let cfg = gpio_config_t {
                pin_bit_mask: 1u64 << pin,
                mode: gpio_mode_t_GPIO_MODE_OUTPUT,
                pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
                pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
                intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
            };
            // SAFETY: gpio_config validates the pin mask; called before any
            // other task touches these pins.
            let ret = unsafe { gpio_config(&cfg) };
            if ret != ESP_OK as i32 {
                return Err(PinFault::ConfigFailed { line, rc: ret });
            }
            // SAFETY: pin was just configured as an output.
            unsafe { gpio_set_level(pin, 0) };
        }
        info!("gpio: encoder lines configured (all low)");
        Ok(())
    }

    fn write(&mut self, line: Line, high: bool) {
        // SAFETY: gpio_set_level writes to an already-configured output pin;
        // serialisation is enforced by the caller's exclusion lock.
        let ret = unsafe { gpio_set_level(gpio_of(line), u32::from(high)) };
        if ret != ESP_OK as i32 {
            self.latch(PinFault::WriteFailed { line, rc: ret });
        }
    }

    fn clear_fault(&mut self) {
        self.fault = None;
    }

    fn last_fault(&self) -> Option<PinFault> {
        self.fault
    }
}

#[cfg(not(target_os = "espidf"))]
impl EncoderPins for BoardEncoder {
    fn initialize(&mut self) -> Result<(), PinFault> {
        self.levels = [false; 6];
        info!("gpio(sim): encoder lines configured (all low)");
        Ok(())
    }

    fn write(&mut self, line: Line, high: bool) {
        debug!("gpio(sim): {} (GPIO{}) <- {}", line, gpio_of(line), high);
        self.levels[level_index(line)] = high;
    }

    fn clear_fault(&mut self) {
        self.fault = None;
    }

    fn last_fault(&self) -> Option<PinFault> {
        self.fault
    }
}
