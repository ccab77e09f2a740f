//! Hardware Abstraction Layer (HAL)
//!
//! Interfaces estreitas de acesso a hardware, separadas das implementações
//! MMIO concretas. O motor de verificação enxerga apenas os traits; os
//! testes injetam bancos de registradores simulados no lugar do hardware.

pub mod platform;
pub mod traits;

pub use traits::*;
