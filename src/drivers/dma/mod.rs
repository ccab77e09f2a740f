//! # Driver do Engine de Transferência (SP DMA)
//!
//! Interface de registradores do engine que copia blocos da RAM principal
//! para a memória privada do coprocessador de sinal, sem passar pelo
//! load/store nem pela cache da CPU.
//!
//! Programação de uma transferência de leitura (RAM → memória privada):
//! 1. endereço na RAM principal em `REG_DRAM_ADDR`;
//! 2. destino na memória privada em `REG_PRIVATE_ADDR`;
//! 3. `len - 1` em `REG_READ_LEN` — a escrita dispara a transferência.
//!
//! A conclusão é observada consultando `REG_STATUS` até os três bits de
//! ocupação ([`SpStatus::TRANSFER_PENDING`]) limparem. O driver não espera
//! sozinho: a política de espera é do chamador (ver
//! [`WaitStrategy`](crate::hal::traits::WaitStrategy)).

use crate::hal::traits::{RegisterFile, TransferEngine};
use bitflags::bitflags;

// =============================================================================
// REGISTRADORES
// =============================================================================

/// Endereço de destino na memória privada do engine.
pub const REG_PRIVATE_ADDR: usize = 0x00;

/// Endereço de origem na RAM principal.
pub const REG_DRAM_ADDR: usize = 0x04;

/// Comprimento da leitura; a escrita dispara a transferência.
pub const REG_READ_LEN: usize = 0x08;

/// Status do engine (somente leitura para o diagnóstico).
pub const REG_STATUS: usize = 0x10;

bitflags! {
    /// Bits do registrador de status do engine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpStatus: u32 {
        /// Transferência DMA em andamento.
        const DMA_BUSY = 1 << 2;
        /// Fila de transferências cheia.
        const DMA_FULL = 1 << 3;
        /// Acesso de I/O em andamento.
        const IO_BUSY = 1 << 4;
    }
}

impl SpStatus {
    /// Conjunto de bits que indica transferência ainda não concluída.
    pub const TRANSFER_PENDING: SpStatus = SpStatus::DMA_BUSY
        .union(SpStatus::DMA_FULL)
        .union(SpStatus::IO_BUSY);
}

// =============================================================================
// DRIVER
// =============================================================================

/// Driver do engine sobre um banco de registradores qualquer.
pub struct SpDma<R: RegisterFile> {
    regs: R,
}

impl<R: RegisterFile> SpDma<R> {
    pub const fn new(regs: R) -> Self {
        Self { regs }
    }
}

impl<R: RegisterFile> TransferEngine for SpDma<R> {
    fn copy_to_private(&mut self, dram_offset: u32, private_offset: u32, len: u32) {
        debug_assert!(len > 0, "transferência de comprimento zero");

        self.regs.write32(REG_DRAM_ADDR, dram_offset);
        self.regs.write32(REG_PRIVATE_ADDR, private_offset);
        // O hardware conta a partir de zero; a escrita dispara.
        self.regs.write32(REG_READ_LEN, len - 1);
    }

    fn is_busy(&mut self) -> bool {
        let status = SpStatus::from_bits_truncate(self.regs.read32(REG_STATUS));
        status.intersects(SpStatus::TRANSFER_PENDING)
    }
}

// =============================================================================
// TESTS
// =============================================================================
