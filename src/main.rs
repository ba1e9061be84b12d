//! RFPlug firmware — main entry point.
//!
//! Thin bootstrap: logger, GPIO bring-up, then a demo loop cycling the
//! wired sockets.  All control logic lives in the library.

use anyhow::Result;
use log::info;

use rfplug::{BoardEncoder, PlugBank, SystemDelay};

use std::time::Duration;

fn main() -> Result<()> {
    // ── ESP-IDF bootstrap ─────────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RFPlug v{}", env!("CARGO_PKG_VERSION"));

    // GPIO init failure is critical — nothing can work without it.
    let bank = PlugBank::new(BoardEncoder::new(), SystemDelay)?;

    // Baseline: whatever the sockets were doing before the reboot, start
    // from everything off.
    let all = bank.plug(rfplug::PlugId::ALL)?;
    all.off()?;

    let one = bank.plug(rfplug::PlugId::ONE)?;
    let two = bank.plug(rfplug::PlugId::TWO)?;

    loop {
        for plug in [one, two] {
            plug.on()?;
            info!("{} -> on (believed {})", plug.id(), plug.is_on());
            std::thread::sleep(Duration::from_secs(5));

            plug.off()?;
            info!("{} -> off (believed {})", plug.id(), plug.is_on());
            std::thread::sleep(Duration::from_secs(5));
        }
    }
}
