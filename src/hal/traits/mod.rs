//! Traits do HAL
//!
//! Define as interfaces abstratas para hardware.

pub mod bus;
pub mod cache;
pub mod dma;
pub mod wait;

pub use bus::*;
pub use cache::*;
pub use dma::*;
pub use wait::*;
