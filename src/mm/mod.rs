//! Verificação de Memória
//!
//! O único subsistema de memória deste crate é o motor de verificação.
//! Não há alocador nem gerência de memória: a região inteira pertence ao
//! teste.

pub mod memtest;
