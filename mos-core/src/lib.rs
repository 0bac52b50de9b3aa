//! MOS Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Register-Konstanten, Traits, Pure Functions und die
//! Blink-Steuerung, die sowohl auf dem 6502 als auch im Host-Test läuft.

#![no_std]

pub mod blinker;
pub mod logic;
pub mod registers;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use blinker::Blinker;
pub use logic::{ERROR_PREFIX, GREETING, for_each_c_chunk, lit_count, lit_mask, output_pins};
pub use registers::{
    LED_COUNT, LED_DIRECTION_ADDR, LED_DIRECTION_OUTPUTS, LED_OUTPUT_ADDR, LED_WIRED_MASK,
    LedPort, RegisterBus,
};
pub use traits::{DelayTimer, Error, Peripheral, SerialWriter};
pub use types::{BlinkTiming, LedState};
