//! Memory-mapped Register des LED-Ports
//!
//! Die Adressen sind Teil des Board-Vertrags (Tang Nano 9K, 6502 @ 3.375 MHz).
//! Zugriff läuft ausschließlich über einen [`RegisterBus`], damit derselbe Code
//! auf der Hardware (volatile MMIO) und im Test (Mock) läuft.

use crate::types::LedState;

// ============================================================================
// Adressen und Werte
// ============================================================================

/// LED-Ausgangsregister (aktiv-low, nur Bits 5-0 verdrahtet)
pub const LED_OUTPUT_ADDR: u16 = 0xC001;

/// LED-Richtungsregister (pro Bit: 0 = Ausgang, 1 = Eingang)
pub const LED_DIRECTION_ADDR: u16 = 0xC003;

/// Richtungswert beim Start: Bits 5-0 als Ausgänge
pub const LED_DIRECTION_OUTPUTS: u8 = 0xC0;

/// Maske der tatsächlich verdrahteten LED-Bits
pub const LED_WIRED_MASK: u8 = 0x3F;

/// Anzahl der LEDs am Port
pub const LED_COUNT: u32 = 6;

// ============================================================================
// Register Bus
// ============================================================================

/// Byte-weiser Zugriff auf memory-mapped Register
///
/// # Implementierungen
/// - **Production:** `Mmio` (volatile Zugriff auf absolute Adressen)
/// - **Testing:** Mock-Bus mit Schreib-Protokoll
pub trait RegisterBus {
    /// Liest den aktuellen Wert eines Registers
    fn read(&mut self, addr: u16) -> u8;

    /// Schreibt einen Wert; wirkt sofort auf die Hardware
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

// ============================================================================
// LED Port Handle
// ============================================================================

/// Besitzendes Handle auf die beiden LED-Register
///
/// Kein Software-Cache: jeder Lesezugriff geht auf den Bus.
pub struct LedPort<B: RegisterBus> {
    bus: B,
}

impl<B: RegisterBus> LedPort<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Markiert Bits 5-0 als Ausgänge
    pub fn configure_outputs(&mut self) {
        self.bus.write(LED_DIRECTION_ADDR, LED_DIRECTION_OUTPUTS);
    }

    /// Schreibt den Ausgangswert eines Zustands (0x00 oder 0xFF)
    pub fn show(&mut self, state: LedState) {
        self.bus.write(LED_OUTPUT_ADDR, state.output_value());
    }

    pub fn output(&mut self) -> u8 {
        self.bus.read(LED_OUTPUT_ADDR)
    }

    pub fn direction(&mut self) -> u8 {
        self.bus.read(LED_DIRECTION_ADDR)
    }

    /// Zustand laut Hardware; `None` bei Zwischenwerten
    pub fn state(&mut self) -> Option<LedState> {
        LedState::from_output(self.output())
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn release(self) -> B {
        self.bus
    }
}
