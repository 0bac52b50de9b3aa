// Hardware-Timer über die Board-Library
//
// delay_ms der Library nimmt nur 16 Bit, längere Delays werden zerlegt.

use embedded_hal::delay::DelayNs;
use mos_core::{DelayTimer, Error};

use crate::hal::bsp;

const NANOS_PER_MS: u32 = 1_000_000;

/// Real Hardware Timer
pub struct BspTimer {
    _private: (),
}

impl BspTimer {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for BspTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayTimer for BspTimer {
    fn init(&mut self) -> Result<(), Error> {
        // SAFETY: einmaliger Aufruf aus der Startsequenz
        unsafe { bsp::timer_init() };
        Ok(())
    }
}

impl DelayNs for BspTimer {
    // Auflösung des Timers ist 1 ms, kürzere Delays werden aufgerundet
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns.div_ceil(NANOS_PER_MS));
    }

    fn delay_ms(&mut self, mut ms: u32) {
        while ms > 0 {
            let chunk = ms.min(u32::from(u16::MAX));
            // SAFETY: timer_init() lief in der Startsequenz
            unsafe { bsp::delay_ms(chunk as u16) };
            ms -= chunk;
        }
    }
}
