//! # Driver de Timing da Interface de Vídeo
//!
//! Escreve, uma única vez, um conjunto de parâmetros de timing no banco de
//! registradores da interface de vídeo, só para produzir um sinal estável
//! no monitor — a prova visível de que o diagnóstico está vivo. Não tem
//! nenhum efeito na correção do teste de memória.
//!
//! O conjunto de timing depende do padrão de vídeo da região do console
//! (PAL, NTSC ou MPAL), latcheado no boot e entregue ao diagnóstico como
//! valor explícito (ver [`RegionCode`]).

use crate::hal::traits::RegisterFile;

// =============================================================================
// REGISTRADORES DA VI
// =============================================================================

const REG_CONTROL: usize = 0x00;
const REG_ORIGIN: usize = 0x04;
const REG_WIDTH: usize = 0x08;
/// Primeiro dos sete registradores de timing (burst, v-sync, h-sync,
/// leap, h-video, v-video, v-burst), contíguos a partir de 0x14.
const REG_TIMING_BASE: usize = 0x14;
const REG_X_SCALE: usize = 0x30;
const REG_Y_SCALE: usize = 0x34;

/// Modo de saída habilitado (framebuffer 32 bits, AA resample).
const CONTROL_ENABLE: u32 = 0x3202;

/// Largura da linha em pixels.
const OUTPUT_WIDTH: u32 = 640;

/// Escala 1:1 em ponto fixo 2.10.
const SCALE_1X: u32 = 0x400;

/// Origem do framebuffer. Fica em zero: o conteúdo exibido é a própria
/// base da RAM — irrelevante, só o sincronismo importa.
const FRAME_ORIGIN: u32 = 0;

// =============================================================================
// TABELAS DE TIMING POR REGIÃO
// =============================================================================

const TIMING_PAL: [u32; 7] = [
    0x0404_233a,
    0x0000_0271,
    0x0015_0c69,
    0x0c6f_0c6e,
    0x0080_0300,
    0x005f_0239,
    0x0009_026b,
];

const TIMING_NTSC: [u32; 7] = [
    0x03e5_2239,
    0x0000_020d,
    0x0000_0c15,
    0x0c15_0c15,
    0x006c_02ec,
    0x0025_01ff,
    0x000e_0204,
];

const TIMING_MPAL: [u32; 7] = [
    0x0465_1e39,
    0x0000_020d,
    0x0004_0c11,
    0x0c19_0c1a,
    0x006c_02ec,
    0x0025_01ff,
    0x000e_0204,
];

// =============================================================================
// CÓDIGO DE REGIÃO
// =============================================================================

/// Padrão de vídeo da região do console, latcheado no boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCode {
    Pal,
    Ntsc,
    Mpal,
}

impl RegionCode {
    /// Decodifica o valor cru latcheado no boot.
    ///
    /// Valores desconhecidos caem em NTSC: melhor um sinal possivelmente
    /// fora de sincronismo do que nenhum sinal "vivo".
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => RegionCode::Pal,
            1 => RegionCode::Ntsc,
            2 => RegionCode::Mpal,
            _ => RegionCode::Ntsc,
        }
    }

    const fn timing(self) -> &'static [u32; 7] {
        match self {
            RegionCode::Pal => &TIMING_PAL,
            RegionCode::Ntsc => &TIMING_NTSC,
            RegionCode::Mpal => &TIMING_MPAL,
        }
    }
}

// =============================================================================
// INICIALIZAÇÃO
// =============================================================================

/// Programa o banco da interface de vídeo para a região dada.
///
/// Escrita única, no boot; depois disso o diagnóstico nunca mais toca o
/// banco.
pub fn init<R: RegisterFile>(regs: &mut R, region: RegionCode) {
    // Origem alinhada a 64 bytes, exigência do hardware de varredura.
    regs.write32(REG_ORIGIN, FRAME_ORIGIN & !(64 - 1));
    regs.write32(REG_WIDTH, OUTPUT_WIDTH);
    regs.write32(REG_X_SCALE, SCALE_1X);
    regs.write32(REG_Y_SCALE, SCALE_1X);

    for (i, value) in region.timing().iter().enumerate() {
        regs.write32(REG_TIMING_BASE + i * 4, *value);
    }

    // Habilitar a saída por último, com o timing já estável.
    regs.write32(REG_CONTROL, CONTROL_ENABLE);
}

// =============================================================================
// TESTS
// =============================================================================
