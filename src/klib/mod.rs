//! Utilitários internos do diagnóstico.

pub mod align;
