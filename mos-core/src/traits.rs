//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen zu UART und Timer
//! ohne konkrete Implementierung.

use core::fmt;

use embedded_hal::delay::DelayNs;

/// Peripherie, die beim Start initialisiert wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    Uart,
    Timer,
}

/// Fehler-Typ für Peripherie-Operationen
///
/// Fehler werden nur über den Debug-Kanal gemeldet, nie wiederholt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Init-Routine meldet fehlende oder nicht bereite Hardware
    PeripheralNotReady(Peripheral),
    /// Delay passt nicht in den 16-Bit Zähler des Timers
    TimerOverflow,
}

impl Error {
    /// Kurzbeschreibung für den Debug-Kanal
    pub const fn as_str(self) -> &'static str {
        match self {
            Error::PeripheralNotReady(Peripheral::Uart) => "UART not ready",
            Error::PeripheralNotReady(Peripheral::Timer) => "timer not ready",
            Error::TimerOverflow => "timer overflow",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait für den seriellen Debug-Kanal
///
/// # Implementierungen
/// - **Production:** BspUart (`uart_init` / `uart_puts` der Board-Library)
/// - **Testing:** MockSerial (in-memory Zeilen-Log)
pub trait SerialWriter {
    /// Initialisiert die UART (einmalig beim Start)
    fn init(&mut self) -> Result<(), Error>;

    /// Schreibt Text ohne Zeilenende
    fn write_str(&mut self, text: &str) -> Result<(), Error>;

    /// Schreibt eine Zeile mit `\r\n`
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.write_str(line)?;
        self.write_str("\r\n")
    }
}

/// Trait für den Hardware-Timer
///
/// Die Delays selbst kommen aus `embedded_hal::delay::DelayNs`;
/// `delay_ms` blockiert bis die Zeit abgelaufen ist.
pub trait DelayTimer: DelayNs {
    /// Initialisiert den Timer (einmalig beim Start)
    fn init(&mut self) -> Result<(), Error>;
}
