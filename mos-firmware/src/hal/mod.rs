// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus mos-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod bsp;
pub mod mmio;
pub mod timer;
pub mod uart;

pub use mmio::Mmio;
pub use timer::BspTimer;
pub use uart::BspUart;
