//! Trait de manutenção de cache de dados.
//!
//! A região sob teste é acessada por dois agentes independentes (CPU e
//! engine de transferência) sem protocolo de coerência em hardware. Cada
//! handoff entre agentes precisa ser precedido da operação de manutenção
//! adequada — é isso, e só isso, que serializa a visibilidade.

/// Operações de manutenção da cache de dados, atômicas em relação à
/// thread chamadora.
pub trait CacheMaintenance {
    /// Limpa/invalida a cache de dados inteira.
    ///
    /// Usada antes da varredura inicial: toda leitura subsequente deve
    /// refletir o conteúdo real da RAM, não artefatos de execução anterior.
    fn clear_data_cache(&mut self);

    /// Writeback-and-invalidate de um intervalo de bytes da região.
    ///
    /// Compromete a cópia cacheada na RAM física e a marca inválida,
    /// forçando leituras futuras a buscar valores frescos. `offset` é
    /// relativo à base da região sob teste.
    fn writeback_invalidate(&mut self, offset: usize, len: usize);
}
