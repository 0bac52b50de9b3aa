//! LED Blink Control Object
//!
//! Startsequenz und Toggle-Loop ohne Hardware-Abhängigkeit. Register, UART
//! und Timer kommen als Traits rein, damit Tests Mocks einsetzen können.

use crate::logic::{ERROR_PREFIX, GREETING};
use crate::registers::{LedPort, RegisterBus};
use crate::traits::{DelayTimer, Error, SerialWriter};
use crate::types::{BlinkTiming, LedState};

/// Hauptsteuerung: besitzt LED-Port, Debug-Kanal und Timer
///
/// # Ablauf
/// 1. [`startup`](Self::startup): Richtung 0xC0, Ausgang 0x00, UART/Timer init, Begrüßung
/// 2. [`step`](Self::step): Status-Zeile, Ausgang schreiben, Halbperiode warten
/// 3. [`run`](Self::run): beides endlos, kehrt nie zurück
pub struct Blinker<B: RegisterBus, S: SerialWriter, T: DelayTimer> {
    port: LedPort<B>,
    serial: S,
    timer: T,
    timing: BlinkTiming,
    /// Zuletzt auf den Port geschriebener Zustand
    shown: LedState,
    /// Zustand, den der nächste `step()` zeigt
    next: LedState,
    half_cycles: u32,
}

impl<B: RegisterBus, S: SerialWriter, T: DelayTimer> Blinker<B, S, T> {
    pub fn new(bus: B, serial: S, timer: T, timing: BlinkTiming) -> Self {
        Self {
            port: LedPort::new(bus),
            serial,
            timer,
            timing,
            shown: LedState::INITIAL,
            next: LedState::INITIAL,
            half_cycles: 0,
        }
    }

    /// Einmalige Startsequenz
    ///
    /// Die Richtung wird vor jedem Schreibzugriff auf den Ausgang gesetzt.
    /// Init-Fehler sind nicht fatal: sie werden gemeldet und der Start läuft weiter.
    pub fn startup(&mut self) {
        self.port.configure_outputs();
        self.port.show(LedState::INITIAL);
        self.shown = LedState::INITIAL;
        self.next = LedState::INITIAL;

        if let Err(e) = self.serial.init() {
            self.report(e);
        }
        if let Err(e) = self.timer.init() {
            self.report(e);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Startup done: {}", self.timing);

        self.emit(GREETING);
    }

    /// Eine Halbperiode: Zeile senden, Port schreiben, blockierend warten
    pub fn step(&mut self) {
        let state = self.next;

        self.emit(state.message());
        self.port.show(state);
        self.shown = state;

        #[cfg(feature = "defmt")]
        defmt::debug!("Blink: {}", state);

        // Blockiert den gesamten Prozess, kein Abbruch möglich
        self.timer.delay_ms(self.timing.half_period_ms());

        self.next = state.toggled();
        self.half_cycles = self.half_cycles.wrapping_add(1);
    }

    /// Startsequenz plus endloser Toggle-Loop
    pub fn run(mut self) -> ! {
        self.startup();
        loop {
            self.step();
        }
    }

    /// Zustand, der aktuell auf dem Port liegt
    pub fn state(&self) -> LedState {
        self.shown
    }

    /// Anzahl abgeschlossener Halbperioden (zwei pro Zyklus)
    pub fn half_cycles(&self) -> u32 {
        self.half_cycles
    }

    pub fn timing(&self) -> BlinkTiming {
        self.timing
    }

    pub fn port(&mut self) -> &mut LedPort<B> {
        &mut self.port
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn into_parts(self) -> (B, S, T) {
        (self.port.release(), self.serial, self.timer)
    }

    /// Fire-and-forget: Schreibfehler werden nur geloggt
    fn emit(&mut self, line: &str) {
        if let Err(_e) = self.serial.write_line(line) {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to write to UART: {}", _e);
        }
    }

    fn report(&mut self, error: Error) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Peripheral init failed: {}", error);

        let _ = self
            .serial
            .write_str(ERROR_PREFIX)
            .and_then(|()| self.serial.write_line(error.as_str()));
    }
}
