//! Entry Point Lógico do Diagnóstico.
//!
//! Este módulo contém a função `diag_main`, o primeiro código Rust de alto
//! nível a executar no caminho de diagnóstico do boot, chamada pelo stub
//! de boot com a stack já configurada.
//!
//! # Responsabilidades
//! 1. **Sinalização**: Avisa o controlador de boot que o estágio assumiu.
//! 2. **Sinal "vivo"**: Programa o timing de vídeo da região.
//! 3. **Transição**: Monta o HAL de hardware e entrega o controle ao motor
//!    de verificação — que nunca retorna.
//!
//! # Contrato de entrada
//! - `memsize`: tamanho utilizável da RAM em bytes, múltiplo da palavra e
//!   no mínimo rascunho + uma janela. Violações param no assert do motor.
//! - `region_code`: valor cru latcheado no boot selecionando o conjunto de
//!   timing de vídeo. Passado explicitamente (nada de estado global) para
//!   manter o caminho determinístico.

use crate::drivers::diag::HwDiag;
use crate::drivers::display::{self, RegionCode};
use crate::drivers::dma::SpDma;
use crate::drivers::pif;
use crate::hal::platform::{DataCache, Dram, Mmio};
use crate::hal::platform::{DRAM_BASE, PIF_RAM_BASE, SP_REGS_BASE, VI_REGS_BASE};
use crate::hal::traits::BusyWait;
use crate::mm::memtest::MemTest;

/// Função principal do diagnóstico.
///
/// **Não retorna**: o loop de janela deslizante é o estado permanente do
/// programa; só um reset externo sai dele.
pub fn diag_main(memsize: usize, region_code: u32) -> ! {
    // 1. Sinalizar o controlador de boot antes de qualquer coisa lenta,
    // senão ele pode derrubar o console por timeout de boot.
    let mut pif = unsafe { Mmio::new(PIF_RAM_BASE) };
    pif::notify_stage_entry(&mut pif);

    crate::kinfo!("Crisol - diagnostico de memoria");
    crate::kinfo!("RAM instalada (bytes):", memsize as u64);

    // 2. Sinal "vivo" no monitor. Nao afeta a correcao do teste.
    let region = RegionCode::from_raw(region_code);
    let mut vi = unsafe { Mmio::new(VI_REGS_BASE) };
    display::init(&mut vi, region);
    crate::kdebug!("(VI) Timing programado, regiao:", region_code as u64);

    // 3. HAL de hardware + motor. Poll infinito: num teste de boot, engine
    // travado significa diagnostico travado (fail-stop).
    let bus = unsafe { Dram::new(DRAM_BASE) };
    let engine = SpDma::new(unsafe { Mmio::new(SP_REGS_BASE) });

    MemTest::new(bus, DataCache, engine, HwDiag, BusyWait, memsize).run()
}
