//! Trait do engine de transferência independente.
//!
//! O engine copia blocos da RAM principal para sua memória privada sem
//! envolvimento da CPU. O diagnóstico o usa apenas para exercitar o
//! barramento de memória por um caminho alternativo ao load/store da CPU
//! (cobre falhas de contenção/arbitragem que um teste só-CPU não vê).

/// Engine de transferência assíncrono.
pub trait TransferEngine {
    /// Programa uma cópia de `len` bytes do deslocamento `dram_offset` da
    /// RAM principal para `private_offset` na memória privada do engine.
    /// A escrita do comprimento dispara a transferência; o retorno é
    /// imediato, a conclusão é observada via [`TransferEngine::is_busy`].
    fn copy_to_private(&mut self, dram_offset: u32, private_offset: u32, len: u32);

    /// Consulta os bits de ocupação do registrador de status.
    fn is_busy(&mut self) -> bool;
}
