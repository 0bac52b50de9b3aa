// UART Debug-Kanal über die Board-Library
//
// uart_puts braucht NUL-terminierte Strings, Rust-&str sind es nicht.
// Die Zerlegung in Stücke macht `mos_core::for_each_c_chunk`.

use mos_core::{Error, SerialWriter, for_each_c_chunk};

use crate::config::UART_CHUNK_SIZE;
use crate::hal::bsp;

/// Real Hardware UART Writer
///
/// Fire-and-forget: die Board-Library meldet keinen Status zurück.
pub struct BspUart {
    _private: (),
}

impl BspUart {
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for BspUart {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialWriter for BspUart {
    fn init(&mut self) -> Result<(), Error> {
        // SAFETY: einmaliger Aufruf aus der Startsequenz
        unsafe { bsp::uart_init() };
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        for_each_c_chunk::<UART_CHUNK_SIZE>(text, |chunk| {
            // SAFETY: chunk ist NUL-terminiert und lebt bis nach dem Aufruf
            unsafe { bsp::uart_puts(chunk.as_ptr().cast()) };
        });
        Ok(())
    }
}
