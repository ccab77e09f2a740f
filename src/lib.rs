//! Crisol — Diagnóstico de Integridade de Memória (boot-stage).
//!
//! Ponto central de exportação dos módulos do diagnóstico.
//!
//! O Crisol é o estado terminal do caminho de diagnóstico do boot: é
//! invocado pelo stub de boot com a stack já configurada, verifica a RAM
//! instalada pelos dois caminhos de acesso (load/store da CPU e engine de
//! transferência independente) e reporta divergências pelo canal de
//! diagnóstico. Nunca retorna.
//!
//! Em build de teste (host) o crate compila com `std` para permitir os
//! dublês simulados de hardware; no alvo real é `no_std` puro.

#![cfg_attr(not(test), no_std)]

// --- Módulos de Baixo Nível (Hardware) ---
pub mod drivers; // Drivers Específicos (Diag, Display, DMA, PIF)
pub mod hal; // Interfaces de acesso a hardware + implementações MMIO

// --- Módulos Centrais (Lógica do Diagnóstico) ---
pub mod core; // Entrada, Logging, Panic
pub mod klib; // Utilitários Internos (Alinhamento)
pub mod mm; // Motor de Verificação de Memória

// Re-exportar o ponto de entrada para acesso fácil no stub de boot.
pub use crate::core::entry::diag_main;
