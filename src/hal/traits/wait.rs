//! Estratégias de espera por condição de hardware.
//!
//! O diagnóstico roda sem scheduler: esperar é obrigatoriamente busy-poll.
//! A política fica atrás de um trait para os testes poderem injetar uma
//! espera limitada no lugar do poll infinito do hardware real.

/// Política de espera por uma condição.
pub trait WaitStrategy {
    /// Consulta `cond` repetidamente até ela valer `true`.
    ///
    /// Retorna `false` se a política desistiu antes da condição valer
    /// (só possível em políticas limitadas).
    fn wait_until<F: FnMut() -> bool>(&mut self, cond: F) -> bool;
}

/// Poll infinito, sem timeout.
///
/// Comportamento fail-stop adequado a um teste de hardware em boot: se o
/// engine nunca conclui, o diagnóstico inteiro trava — não há para onde
/// reportar um timeout mais cedo que o watchdog humano no console.
pub struct BusyWait;

impl WaitStrategy for BusyWait {
    fn wait_until<F: FnMut() -> bool>(&mut self, mut cond: F) -> bool {
        while !cond() {
            core::hint::spin_loop();
        }
        true
    }
}

/// Poll limitado a `max_polls` consultas.
///
/// Para testes e bring-up de placa; o hardware de produção usa [`BusyWait`].
pub struct BoundedWait {
    max_polls: usize,
}

impl BoundedWait {
    pub const fn new(max_polls: usize) -> Self {
        Self { max_polls }
    }
}

impl WaitStrategy for BoundedWait {
    fn wait_until<F: FnMut() -> bool>(&mut self, mut cond: F) -> bool {
        for _ in 0..self.max_polls {
            if cond() {
                return true;
            }
            core::hint::spin_loop();
        }
        false
    }
}

// =============================================================================
// TESTS
// =============================================================================
