//! Implementações de hardware dos traits do HAL.
//!
//! Acesso por ponteiro cru + operações voláteis, no estilo das memops do
//! kernel: leituras e escritas que o compilador não pode elidir nem
//! fundir. Os endereços abaixo são do mapa físico do console alvo — a RAM
//! principal pela janela cacheada, os bancos de controle pela janela não
//! cacheada.

use crate::hal::traits::{CacheMaintenance, MemoryBus, RegisterFile};
use core::sync::atomic::{fence, Ordering};

// =============================================================================
// MAPA DE ENDEREÇOS
// =============================================================================

/// Base da RAM principal (janela cacheada).
pub const DRAM_BASE: usize = 0x8000_0000;

/// Banco de registradores do engine de transferência (janela não cacheada).
pub const SP_REGS_BASE: usize = 0xA404_0000;

/// Banco de registradores da interface de vídeo (janela não cacheada).
pub const VI_REGS_BASE: usize = 0xA440_0000;

/// RAM do controlador de boot (janela não cacheada).
pub const PIF_RAM_BASE: usize = 0xBFC0_0000;

// =============================================================================
// BANCO DE REGISTRADORES MMIO
// =============================================================================

/// Banco de registradores de 32 bits em um endereço base fixo.
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Cria o banco sobre `base`.
    ///
    /// # Safety
    /// `base` deve ser a base de um banco de registradores mapeado e
    /// acessível em acessos de 32 bits, pela vida inteira do valor.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl RegisterFile for Mmio {
    #[inline]
    fn read32(&mut self, offset: usize) -> u32 {
        unsafe { ((self.base + offset) as *const u32).read_volatile() }
    }

    #[inline]
    fn write32(&mut self, offset: usize, value: u32) {
        unsafe { ((self.base + offset) as *mut u32).write_volatile(value) }
    }
}

// =============================================================================
// RAM PRINCIPAL
// =============================================================================

/// A região de RAM sob teste, acessada pela janela cacheada.
pub struct Dram {
    base: usize,
}

impl Dram {
    /// Cria o barramento sobre a janela em `base`.
    ///
    /// # Safety
    /// `base` deve apontar para RAM mapeada; o chamador garante que nada
    /// mais usa essa memória enquanto o diagnóstico roda.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl MemoryBus for Dram {
    #[inline]
    fn read_word(&mut self, offset: usize) -> u64 {
        unsafe { ((self.base + offset) as *const u64).read_volatile() }
    }

    #[inline]
    fn write_word(&mut self, offset: usize, value: u64) {
        unsafe { ((self.base + offset) as *mut u64).write_volatile(value) }
    }

    #[inline]
    fn address_of(&self, offset: usize) -> u64 {
        (self.base + offset) as u64
    }
}

// =============================================================================
// CACHE DE DADOS
// =============================================================================

/// Manutenção da cache de dados da CPU.
///
/// As operações cache-op do alvo (index-invalidate / hit-writeback-
/// invalidate) são primitivas da plataforma; aqui entra a barreira que
/// ordena os acessos em volta delas.
///
/// TODO(prioridade=alta, versão=v0.3): ligar nas cache-ops reais do alvo
/// quando o build cruzado para o console estiver no CI.
pub struct DataCache;

impl CacheMaintenance for DataCache {
    fn clear_data_cache(&mut self) {
        fence(Ordering::SeqCst);
    }

    fn writeback_invalidate(&mut self, _offset: usize, _len: usize) {
        fence(Ordering::SeqCst);
    }
}
