// defmt Global Logger über die UART
//
// Frames werden mit defmt::Encoder (rzCOBS) kodiert und Byte für Byte über
// uart_putc gesendet. Der Debug-Text (uart_puts) teilt sich dieselbe Leitung:
// im Text-Terminal erscheinen die Frames als Binärmüll, für defmt-print ist
// der Text Rauschen. Keins der beiden Tools dekodiert den anderen Strom.

use crate::hal::bsp;

// ============================================================================
// Critical Section (Single-Core)
// ============================================================================

// Das Programm aktiviert nie Interrupts: acquire/release sind No-Ops.
struct SingleCoreCriticalSection;
critical_section::set_impl!(SingleCoreCriticalSection);

unsafe impl critical_section::Impl for SingleCoreCriticalSection {
    unsafe fn acquire() -> critical_section::RawRestoreState {}

    unsafe fn release(_restore: critical_section::RawRestoreState) {}
}

// ============================================================================
// defmt Logger
// ============================================================================

#[defmt::global_logger]
struct UartLogger;

static mut TAKEN: bool = false;
static mut CS_RESTORE: critical_section::RestoreState = critical_section::RestoreState::invalid();
static mut ENCODER: defmt::Encoder = defmt::Encoder::new();

unsafe impl defmt::Logger for UartLogger {
    fn acquire() {
        // SAFETY: wird in release() wieder freigegeben
        let restore = unsafe { critical_section::acquire() };

        // SAFETY: Zugriff auf die statics nur innerhalb der Critical Section
        unsafe {
            // Reentranter Aufruf: parken statt panic!, der Panic Handler
            // würde selbst wieder loggen
            if TAKEN {
                loop {}
            }
            TAKEN = true;
            CS_RESTORE = restore;
            (*(&raw mut ENCODER)).start_frame(do_write);
        }
    }

    unsafe fn flush() {
        // uart_putc blockiert bis das Byte raus ist, nichts zu tun
    }

    unsafe fn release() {
        // SAFETY: nur zwischen acquire() und release() aufgerufen
        unsafe {
            (*(&raw mut ENCODER)).end_frame(do_write);
            TAKEN = false;
            let restore = CS_RESTORE;
            critical_section::release(restore);
        }
    }

    unsafe fn write(bytes: &[u8]) {
        // SAFETY: nur zwischen acquire() und release() aufgerufen
        unsafe { (*(&raw mut ENCODER)).write(bytes, do_write) }
    }
}

fn do_write(bytes: &[u8]) {
    for &byte in bytes {
        // SAFETY: uart_init() lief vor dem ersten Log-Aufruf
        unsafe { bsp::uart_putc(byte) };
    }
}

// ============================================================================
// Panic Handler
// ============================================================================

// Kein Recovery: Panic loggen und CPU parken
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // SAFETY: einzelner Kontrollfluss, nur lesender Zugriff
    let logger_busy = unsafe { TAKEN };
    if !logger_busy {
        defmt::error!("panic: {}", defmt::Display2Format(info));
    }
    loop {}
}
