// =============================================================================
// DIAG DRIVER - CANAL DE DIAGNÓSTICO
// =============================================================================
//
// Console de debug mapeado em memória: um buffer de texto e um registrador
// de comprimento que o probe do lado do host observa.
//
// ARQUITETURA:
// - SEM core::fmt - Evita geração de código de formatação no boot-stage
// - SEM alocação - Apenas strings literais e valores imediatos
// - Estado do canal (cursor de escrita) atrás de spin::Mutex
//
// FUNÇÕES DISPONÍVEIS:
// - emit(byte)       : Envia um byte
// - emit_str(s)      : Envia string literal
// - emit_hex(v)      : Envia u64 em hexadecimal ("0x" + 16 dígitos)
// - emit_nl()        : Envia newline
//
// Este módulo também define o trait `DiagSink`, o colaborador de
// diagnóstico que o motor de verificação consome: uma primitiva "mensagem
// + N valores numéricos". A implementação de hardware (`HwDiag`) encaminha
// para as funções emit_* acima; os testes capturam os relatórios em um
// dublê.
//
// =============================================================================

use spin::Mutex;

// Base do console de debug (janela não cacheada).
const DIAG_BASE: usize = 0xB3FF_0000;

// Registrador de comprimento: escrever o cursor publica o conteúdo.
const REG_WRITE_LEN: usize = 0x14;

// Início do buffer de texto dentro do banco.
const BUF_START: usize = 0x20;

// Capacidade do buffer de texto.
const BUF_SIZE: usize = 0x10000 - BUF_START;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

// =============================================================================
// ESTADO DO CANAL
// =============================================================================

struct Channel {
    cursor: usize,
}

impl Channel {
    const fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Escreve um byte no buffer e publica o novo comprimento.
    fn push(&mut self, byte: u8) {
        unsafe {
            ((DIAG_BASE + BUF_START + self.cursor) as *mut u8).write_volatile(byte);
        }
        self.cursor = (self.cursor + 1) % BUF_SIZE;
        unsafe {
            ((DIAG_BASE + REG_WRITE_LEN) as *mut u32).write_volatile(self.cursor as u32);
        }
    }
}

static CHANNEL: Mutex<Channel> = Mutex::new(Channel::new());

// =============================================================================
// FUNÇÕES DE ESCRITA
// =============================================================================

/// Envia um único byte para o canal de diagnóstico.
pub fn emit(byte: u8) {
    CHANNEL.lock().push(byte);
}

/// Envia uma string para o canal de diagnóstico.
pub fn emit_str(s: &str) {
    let mut ch = CHANNEL.lock();
    for byte in s.bytes() {
        ch.push(byte);
    }
}

/// Envia um u64 em hexadecimal ("0x" + 16 dígitos, sempre com zeros à
/// esquerda — endereços e valores ficam alinhados no log).
pub fn emit_hex(value: u64) {
    let mut digits = [0u8; 16];
    hex_bytes(value, &mut digits);

    let mut ch = CHANNEL.lock();
    ch.push(b'0');
    ch.push(b'x');
    for d in digits {
        ch.push(d);
    }
}

/// Envia newline.
pub fn emit_nl() {
    let mut ch = CHANNEL.lock();
    ch.push(b'\r');
    ch.push(b'\n');
}

/// Converte `value` nos 16 dígitos hexadecimais, do nibble mais
/// significativo para o menos.
fn hex_bytes(value: u64, out: &mut [u8; 16]) {
    for (i, slot) in out.iter_mut().enumerate() {
        let nibble = (value >> ((15 - i) * 4)) & 0xF;
        *slot = HEX_DIGITS[nibble as usize];
    }
}

// =============================================================================
// COLABORADOR DE DIAGNÓSTICO DO MOTOR
// =============================================================================

/// Canal de diagnóstico consumido pelo motor de verificação.
///
/// Um relatório é uma mensagem mais zero ou mais valores numéricos. A
/// formatação exata é problema da implementação; o motor só entrega os
/// dados. Relatórios são o produto do diagnóstico: ao contrário dos macros
/// de log, nunca são filtrados por feature.
pub trait DiagSink {
    /// Emite um relatório imediatamente. Nada é retido.
    fn report(&mut self, msg: &str, values: &[u64]);
}

/// Implementação de hardware do canal: encaminha para o console de debug.
pub struct HwDiag;

impl DiagSink for HwDiag {
    fn report(&mut self, msg: &str, values: &[u64]) {
        emit_str(msg);
        for v in values {
            emit_hex(*v);
            emit_str(" ");
        }
        emit_nl();
    }
}

// =============================================================================
// TESTS
// =============================================================================
