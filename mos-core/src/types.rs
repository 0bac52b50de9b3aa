//! Core Types für die LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

use crate::traits::Error;

/// Zustand des LED-Ports
///
/// Die LEDs sind aktiv-low verdrahtet: `Lit` schreibt 0x00, `Dark` schreibt 0xFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedState {
    /// Alle LEDs an (Ausgang = 0x00)
    Lit,
    /// Alle LEDs aus (Ausgang = 0xFF)
    Dark,
}

impl LedState {
    /// Startzustand nach dem Boot
    pub const INITIAL: LedState = LedState::Lit;

    /// Wert für das Ausgangsregister
    pub const fn output_value(self) -> u8 {
        match self {
            LedState::Lit => 0x00,
            LedState::Dark => 0xFF,
        }
    }

    /// Status-Zeile für den Debug-Kanal
    pub const fn message(self) -> &'static str {
        match self {
            LedState::Lit => "LED ON",
            LedState::Dark => "LED OFF",
        }
    }

    pub const fn toggled(self) -> LedState {
        match self {
            LedState::Lit => LedState::Dark,
            LedState::Dark => LedState::Lit,
        }
    }

    /// Ordnet einen gelesenen Registerwert einem Zustand zu
    ///
    /// Nur 0x00 und 0xFF sind gültige Zustände.
    pub const fn from_output(value: u8) -> Option<LedState> {
        match value {
            0x00 => Some(LedState::Lit),
            0xFF => Some(LedState::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Blink-Timing: Dauer einer Halbperiode in Millisekunden
///
/// Ein voller Zyklus (an + aus) dauert zwei Halbperioden.
/// Serialisiert als nackte Zahl; Deserialisierung läuft über `new()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct BlinkTiming {
    half_period_ms: u16,
}

impl BlinkTiming {
    /// Standard-Halbperiode (500 ms an, 500 ms aus)
    pub const DEFAULT_HALF_PERIOD_MS: u16 = 500;

    /// Prüft die Halbperiode gegen das 16-Bit Argument von `delay_ms`
    ///
    /// # Fehlerbehandlung
    /// Gibt `Error::TimerOverflow` zurück bei 0 oder Werten über `u16::MAX`
    pub fn new(half_period_ms: u32) -> Result<Self, Error> {
        match u16::try_from(half_period_ms) {
            Ok(ms) if ms > 0 => Ok(Self { half_period_ms: ms }),
            _ => Err(Error::TimerOverflow),
        }
    }

    pub const fn half_period_ms(self) -> u32 {
        self.half_period_ms as u32
    }

    pub const fn cycle_ms(self) -> u32 {
        2 * self.half_period_ms as u32
    }
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            half_period_ms: Self::DEFAULT_HALF_PERIOD_MS,
        }
    }
}

impl TryFrom<u32> for BlinkTiming {
    type Error = Error;

    fn try_from(half_period_ms: u32) -> Result<Self, Self::Error> {
        Self::new(half_period_ms)
    }
}

impl From<BlinkTiming> for u32 {
    fn from(timing: BlinkTiming) -> Self {
        timing.half_period_ms()
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ({=u8:#x})", self.message(), self.output_value())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkTiming {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "BlinkTiming {{ half_period_ms: {} }}", self.half_period_ms)
    }
}
