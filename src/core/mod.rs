//! Core Module
//!
//! Orquestração do diagnóstico: ponto de entrada, sistema de logs e
//! tratamento de panic.

pub mod entry;
pub mod logging;
pub mod panic;
