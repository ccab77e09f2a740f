//! # Camada de Drivers do Diagnóstico
//!
//! Drivers mínimos, só o essencial para o teste de memória e para o
//! operador enxergar o resultado:
//!
//! | Driver  | Arquivo       | Papel                                        |
//! |---------|---------------|----------------------------------------------|
//! | Diag    | `diag.rs`     | Console de debug mapeado em memória (logs e relatórios) |
//! | DMA     | `dma/`        | Engine de transferência — caminho de acesso alternativo |
//! | Display | `display/`    | Timing de vídeo — sinal "vivo" no monitor    |
//! | PIF     | `pif.rs`      | Flag de estágio para o controlador de boot   |
//!
//! Todos os drivers de registrador são genéricos sobre
//! [`RegisterFile`](crate::hal::traits::RegisterFile) e portanto
//! testáveis contra um banco simulado.

pub mod diag; // Console de debug - logs e relatórios
pub mod display; // Interface de vídeo - sinal "vivo"
pub mod dma; // Engine de transferência
pub mod pif; // Controlador de boot
