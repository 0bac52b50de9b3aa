//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::registers::LED_WIRED_MASK;

/// Begrüßung nach erfolgreichem Start
pub const GREETING: &str = "6502 Template Ready!";

/// Präfix für Fehlerzeilen auf dem Debug-Kanal
pub const ERROR_PREFIX: &str = "ERR ";

/// Zerlegt Text in NUL-terminierte Stücke für `uart_puts`
///
/// Jedes Stück ist höchstens `N` Bytes lang (inkl. NUL). NUL-Bytes im Text
/// würden den C-String abschneiden und werden übersprungen.
///
/// # Beispiele
///
/// ```
/// # use mos_core::for_each_c_chunk;
/// let mut chunks = 0;
/// for_each_c_chunk::<4>("LED ON", |chunk| {
///     assert_eq!(chunk.last(), Some(&0));
///     chunks += 1;
/// });
/// assert_eq!(chunks, 2); // "LED\0", " ON\0"
/// ```
pub fn for_each_c_chunk<const N: usize>(text: &str, mut emit: impl FnMut(&[u8])) {
    const { assert!(N >= 2, "Chunk braucht Platz für Daten und NUL") };

    let mut buffer = [0u8; N];
    let mut len = 0;
    for byte in text.bytes().filter(|&b| b != 0) {
        buffer[len] = byte;
        len += 1;
        if len == N - 1 {
            buffer[len] = 0;
            emit(&buffer[..=len]);
            len = 0;
        }
    }
    if len > 0 {
        buffer[len] = 0;
        emit(&buffer[..=len]);
    }
}

/// Bits 5-0, deren LED leuchtet (aktiv-low)
///
/// Bits 7-6 sind nicht verdrahtet und werden ignoriert.
///
/// # Beispiele
///
/// ```
/// # use mos_core::lit_mask;
/// assert_eq!(lit_mask(0x00), 0x3F); // alle an
/// assert_eq!(lit_mask(0xFF), 0x00); // alle aus
/// assert_eq!(lit_mask(0xC0), 0x3F); // Bits 7-6 egal
/// ```
pub const fn lit_mask(output: u8) -> u8 {
    !output & LED_WIRED_MASK
}

/// Anzahl leuchtender LEDs
pub const fn lit_count(output: u8) -> u32 {
    lit_mask(output).count_ones()
}

/// Bits, die laut Richtungsregister Ausgänge sind (0 = Ausgang)
pub const fn output_pins(direction: u8) -> u8 {
    !direction
}
