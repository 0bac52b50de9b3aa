// Library-Root: Firmware für die 6502 Soft-CPU (Tang Nano 9K)
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod logger;
pub mod tasks;
