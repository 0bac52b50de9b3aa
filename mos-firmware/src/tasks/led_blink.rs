// LED Blink Task - Steuert den LED-Port über memory-mapped Register
use mos_core::{BlinkTiming, Blinker};

use crate::config::LED_HALF_PERIOD_MS;
use crate::hal::{BspTimer, BspUart, Mmio};

/// LED Blink Task - Einstiegspunkt der Firmware-Logik
///
/// Dieser Task übernimmt die Hardware-Handles und ruft dann die
/// testbare `Blinker`-Logik aus mos-core auf. Kehrt nie zurück.
///
/// Vor `startup()` ist die UART nicht initialisiert, daher hier kein Logging.
///
/// # Parameter
/// - `bus`: Register Bus für den LED-Port (0xC001 / 0xC003)
/// - `uart`: Debug-Kanal
/// - `timer`: Hardware-Timer für die 500 ms Delays
pub fn led_blink_task(bus: Mmio, uart: BspUart, timer: BspTimer) -> ! {
    // config.rs prüft den Bereich schon zur Build-Zeit
    let timing = BlinkTiming::new(LED_HALF_PERIOD_MS).unwrap_or_default();

    // Business Logic aufrufen (Host-Tests nutzen dieselbe Logik mit Mocks)
    Blinker::new(bus, uart, timer, timing).run()
}
