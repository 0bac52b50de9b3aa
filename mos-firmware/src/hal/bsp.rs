// C-Schnittstelle der Board-Library (uart.h / timer.h)
//
// Wird als statische Library gelinkt, siehe build.rs (MOS_BSP_DIR).

use core::ffi::c_char;

unsafe extern "C" {
    pub fn uart_init();
    /// Erwartet einen NUL-terminierten String
    pub fn uart_puts(text: *const c_char);
    /// Rohes Byte, auch 0x00 (für defmt-Frames)
    pub fn uart_putc(byte: u8);
    pub fn timer_init();
    /// Blockiert per Hardware-Timer
    pub fn delay_ms(ms: u16);
}
