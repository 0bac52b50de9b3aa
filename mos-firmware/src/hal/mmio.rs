// Memory-mapped I/O Register Bus
//
// Volatile Lese-/Schreibzugriffe auf absolute 6502-Adressen.
// Es gibt genau eine Instanz pro Programmlauf (Singleton über `take()`).

use core::cell::Cell;

use critical_section::Mutex;
use mos_core::RegisterBus;

static TAKEN: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Hardware Register Bus
///
/// Besitzt exklusiv den I/O-Bereich; nur über `take()` erhältlich.
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Gibt den Bus genau einmal heraus, danach `None`
    pub fn take() -> Option<Self> {
        critical_section::with(|cs| {
            let taken = TAKEN.borrow(cs);
            if taken.get() {
                None
            } else {
                taken.set(true);
                Some(Self { _private: () })
            }
        })
    }
}

impl RegisterBus for Mmio {
    fn read(&mut self, addr: u16) -> u8 {
        // SAFETY: Adressen stammen aus dem Board-Memory-Map (I/O-Bereich 0xC000),
        // &mut self garantiert exklusiven Zugriff
        unsafe { core::ptr::read_volatile(usize::from(addr) as *const u8) }
    }

    fn write(&mut self, addr: u16, value: u8) {
        // SAFETY: siehe read()
        unsafe { core::ptr::write_volatile(usize::from(addr) as *mut u8, value) }
    }
}
