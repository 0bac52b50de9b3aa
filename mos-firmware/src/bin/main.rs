// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt der Rust-Runtime (crt0 der Board-Library ruft main)
#![no_main]

use core::ffi::{c_char, c_int};

// Logger, Critical Section und Panic Handler kommen mit der Library
use tang_6502_template::hal::{BspTimer, BspUart, Mmio};
use tang_6502_template::tasks::led_blink_task;

/// Main Entry Point
///
/// Übernimmt die Hardware-Handles und startet den Blink-Task.
/// Kehrt nie zurück: die Firmware läuft bis zum Stromausfall.
#[unsafe(no_mangle)]
pub extern "C" fn main(_argc: c_int, _argv: *const *const c_char) -> c_int {
    // Erster und einziger Aufruf, `take()` kann hier nicht fehlschlagen
    let Some(bus) = Mmio::take() else {
        loop {}
    };

    led_blink_task(bus, BspUart::new(), BspTimer::new())
}
