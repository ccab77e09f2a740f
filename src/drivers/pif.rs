//! Notificação de estágio ao controlador de boot.
//!
//! O controlador de boot observa uma flag na sua RAM interna para saber em
//! qual estágio a CPU está. O diagnóstico escreve a flag uma única vez, na
//! entrada, sinalizando que assumiu o controle — sem isso o controlador
//! pode resetar o console por achar que o boot travou.

use crate::hal::traits::RegisterFile;

/// Deslocamento da flag de estágio dentro da RAM do controlador.
const REG_STAGE_FLAG: usize = 0x7FC;

/// Valor da flag: estágio de diagnóstico assumiu a CPU.
const STAGE_DIAG_ALIVE: u32 = 0x8;

/// Sinaliza ao controlador de boot que o diagnóstico assumiu.
pub fn notify_stage_entry<R: RegisterFile>(regs: &mut R) {
    regs.write32(REG_STAGE_FLAG, STAGE_DIAG_ALIVE);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRegs {
        writes: Vec<(usize, u32)>,
    }

    impl RegisterFile for MockRegs {
        fn read32(&mut self, _offset: usize) -> u32 {
            0
        }

        fn write32(&mut self, offset: usize, value: u32) {
            self.writes.push((offset, value));
        }
    }

    #[test]
    fn test_notify_writes_stage_flag() {
        let mut regs = MockRegs { writes: Vec::new() };
        notify_stage_entry(&mut regs);
        assert_eq!(regs.writes, vec![(REG_STAGE_FLAG, STAGE_DIAG_ALIVE)]);
    }
}
