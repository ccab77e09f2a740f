//! Traits de acesso a memória e a registradores MMIO.
//!
//! Todo acesso a hardware do diagnóstico passa por estas duas interfaces.
//! As implementações reais (ponteiro cru + acesso volátil) estão em
//! `hal::platform`; os testes usam bancos simulados.

/// Acesso palavra a palavra (u64) à região de memória sob teste.
///
/// Os deslocamentos são em bytes, relativos à base da região, e devem
/// estar alinhados à palavra. As leituras/escritas são voláteis na
/// implementação de hardware: o compilador não pode elidir nem reordenar
/// os acessos que o teste depende de observar.
pub trait MemoryBus {
    /// Lê a palavra no deslocamento `offset` da região.
    fn read_word(&mut self, offset: usize) -> u64;

    /// Escreve `value` na palavra no deslocamento `offset` da região.
    fn write_word(&mut self, offset: usize, value: u64);

    /// Endereço absoluto correspondente ao deslocamento, para relatórios.
    fn address_of(&self, offset: usize) -> u64;
}

/// Banco de registradores MMIO de 32 bits.
///
/// Interface única para todos os bancos de controle (engine de
/// transferência, interface de vídeo, controlador de boot, console de
/// debug). `offset` é em bytes a partir da base do banco.
pub trait RegisterFile {
    /// Lê o registrador no deslocamento `offset`.
    fn read32(&mut self, offset: usize) -> u32;

    /// Escreve `value` no registrador no deslocamento `offset`.
    fn write32(&mut self, offset: usize, value: u32);
}
