// Task-Modul: Enthält die Firmware-Tasks
//
// Es gibt genau einen Kontrollfluss (keine Interrupts, kein Scheduler).

pub mod led_blink;

// Re-export Tasks für einfachen Import
pub use led_blink::led_blink_task;
