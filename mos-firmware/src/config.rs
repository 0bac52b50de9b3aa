// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Register-Adressen liegen in mos-core (Board-Vertrag), hier nur Timing und Buffer.

use mos_core::BlinkTiming;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Blink-Halbperiode in Millisekunden (an oder aus)
/// Kann zur Build-Zeit über LED_HALF_PERIOD_MS überschrieben werden (siehe .env)
pub const LED_HALF_PERIOD_MS: u32 = match option_env!("LED_HALF_PERIOD_MS") {
    Some(value) => parse_ms(value),
    None => BlinkTiming::DEFAULT_HALF_PERIOD_MS as u32,
};

// delay_ms der Board-Library nimmt nur 16 Bit
const _: () = assert!(
    LED_HALF_PERIOD_MS > 0 && LED_HALF_PERIOD_MS <= u16::MAX as u32,
    "LED_HALF_PERIOD_MS muss zwischen 1 und 65535 liegen"
);

// ============================================================================
// UART Konfiguration
// ============================================================================

/// Stack-Buffer für uart_puts (inkl. NUL-Terminator)
/// Längere Texte werden in Stücken gesendet
pub const UART_CHUNK_SIZE: usize = 32;

/// Dezimal-Parser für Build-Zeit Werte
///
/// Ungültige Eingaben brechen den Build ab statt still auf 0 zu fallen.
const fn parse_ms(value: &str) -> u32 {
    let bytes = value.as_bytes();
    assert!(!bytes.is_empty(), "LED_HALF_PERIOD_MS ist leer");

    let mut result: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(
            digit.is_ascii_digit(),
            "LED_HALF_PERIOD_MS muss eine Dezimalzahl sein"
        );
        result = result * 10 + (digit - b'0') as u32;
        i += 1;
    }
    result
}
