//! Gemeinsame Mocks für die Host-Tests
//!
//! Alle Mocks schreiben in denselben Trace, damit Tests die Reihenfolge
//! von Register-Zugriffen, UART-Zeilen und Delays prüfen können.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use mos_core::{DelayTimer, Error, LED_OUTPUT_ADDR, Peripheral, RegisterBus, SerialWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RegWrite { addr: u16, value: u8, at_ms: u64 },
    UartInit,
    TimerInit,
    Line(String),
    Delay(u32),
}

pub type Trace = Rc<RefCell<Vec<Event>>>;

/// Shared "Uhr" des Fake-Timers, damit der Bus Zeitstempel vergeben kann
pub type Now = Rc<RefCell<u64>>;

pub fn new_trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Mock Register Bus
// ============================================================================

pub struct MockBus {
    pub regs: HashMap<u16, u8>,
    trace: Trace,
    now: Now,
}

impl MockBus {
    pub fn new(trace: Trace, now: Now) -> Self {
        Self {
            // Reset-Wert der Register ist unbekannt, 0xAA ist kein gültiger Zustand
            regs: HashMap::from([(LED_OUTPUT_ADDR, 0xAA), (mos_core::LED_DIRECTION_ADDR, 0xFF)]),
            trace,
            now,
        }
    }
}

impl RegisterBus for MockBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.regs.get(&addr).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.regs.insert(addr, value);
        self.trace.borrow_mut().push(Event::RegWrite {
            addr,
            value,
            at_ms: *self.now.borrow(),
        });
    }
}

// ============================================================================
// Mock Serial
// ============================================================================

pub struct MockSerial {
    trace: Trace,
    partial: String,
    pub fail_init: bool,
    pub fail_writes: bool,
    pub init_count: usize,
}

impl MockSerial {
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            partial: String::new(),
            fail_init: false,
            fail_writes: false,
            init_count: 0,
        }
    }
}

impl SerialWriter for MockSerial {
    fn init(&mut self) -> Result<(), Error> {
        self.init_count += 1;
        self.trace.borrow_mut().push(Event::UartInit);
        if self.fail_init {
            return Err(Error::PeripheralNotReady(Peripheral::Uart));
        }
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::PeripheralNotReady(Peripheral::Uart));
        }

        self.partial.push_str(text);
        while let Some(end) = self.partial.find("\r\n") {
            let line: String = self.partial.drain(..end + 2).collect();
            self.trace
                .borrow_mut()
                .push(Event::Line(line.trim_end_matches("\r\n").to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Fake Clock
// ============================================================================

pub struct FakeClock {
    trace: Trace,
    now: Now,
    pub fail_init: bool,
    /// Panic nach dieser Anzahl Delays (beendet den Endlos-Loop im Test)
    pub stop_after: Option<usize>,
    pub delays: usize,
}

pub const CLOCK_STOPPED: &str = "fake clock stopped";

impl FakeClock {
    pub fn new(trace: Trace, now: Now) -> Self {
        Self {
            trace,
            now,
            fail_init: false,
            stop_after: None,
            delays: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        *self.now.borrow()
    }
}

impl DelayTimer for FakeClock {
    fn init(&mut self) -> Result<(), Error> {
        self.trace.borrow_mut().push(Event::TimerInit);
        if self.fail_init {
            return Err(Error::PeripheralNotReady(Peripheral::Timer));
        }
        Ok(())
    }
}

impl DelayNs for FakeClock {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns.div_ceil(1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        if self.stop_after == Some(self.delays) {
            panic!("{}", CLOCK_STOPPED);
        }
        self.delays += 1;
        self.trace.borrow_mut().push(Event::Delay(ms));
        *self.now.borrow_mut() += u64::from(ms);
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub struct Rig {
    pub trace: Trace,
    pub now: Now,
    pub bus: MockBus,
    pub serial: MockSerial,
    pub clock: FakeClock,
}

pub fn rig() -> Rig {
    let trace = new_trace();
    let now: Now = Rc::new(RefCell::new(0));
    Rig {
        bus: MockBus::new(trace.clone(), now.clone()),
        serial: MockSerial::new(trace.clone()),
        clock: FakeClock::new(trace.clone(), now.clone()),
        trace,
        now,
    }
}

pub fn lines(trace: &Trace) -> Vec<String> {
    trace
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Line(l) => Some(l.clone()),
            _ => None,
        })
        .collect()
}

/// Alle Schreibzugriffe auf eine Adresse: (Wert, Zeitpunkt)
pub fn writes_to(trace: &Trace, target: u16) -> Vec<(u8, u64)> {
    trace
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::RegWrite { addr, value, at_ms } if *addr == target => Some((*value, *at_ms)),
            _ => None,
        })
        .collect()
}
