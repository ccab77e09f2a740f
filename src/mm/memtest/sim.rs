//! Dublês simulados de hardware para os testes do motor.
//!
//! Cada dublê implementa um trait do HAL sobre estado em memória do host.
//! Os dublês que participam de asserções de ordem (cache, engine, primeira
//! leitura do barramento) registram eventos num log compartilhado.

use std::cell::RefCell;
use std::rc::Rc;

use crate::drivers::diag::DiagSink;
use crate::hal::traits::{CacheMaintenance, MemoryBus, TransferEngine};

/// Log de eventos compartilhado entre dublês.
pub type EventLog = Rc<RefCell<Vec<&'static str>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

// =============================================================================
// RAM SIMULADA
// =============================================================================

/// RAM simulada com contagem de escritas e palavras "presas" (stuck-at).
pub struct SimDram {
    pub words: Vec<u64>,
    /// Base usada nos endereços de relatório.
    pub base: u64,
    /// Contagem de escritas por palavra.
    pub writes: Vec<u32>,
    /// Palavras presas: (deslocamento em bytes, valor lido sempre).
    pub stuck: Vec<(usize, u64)>,
    log: Option<EventLog>,
    first_read_logged: bool,
}

impl SimDram {
    pub fn new(memsize: usize) -> Self {
        let words = memsize / 8;
        Self {
            words: vec![0; words],
            base: 0x8000_0000,
            writes: vec![0; words],
            stuck: Vec::new(),
            log: None,
            first_read_logged: false,
        }
    }

    pub fn with_log(memsize: usize, log: &EventLog) -> Self {
        let mut dram = Self::new(memsize);
        dram.log = Some(Rc::clone(log));
        dram
    }

    /// Valor realmente armazenado (ignora palavras presas).
    pub fn word_at(&self, offset: usize) -> u64 {
        self.words[offset / 8]
    }

    pub fn write_count(&self, offset: usize) -> u32 {
        self.writes[offset / 8]
    }
}

impl MemoryBus for SimDram {
    fn read_word(&mut self, offset: usize) -> u64 {
        if !self.first_read_logged {
            self.first_read_logged = true;
            if let Some(log) = &self.log {
                log.borrow_mut().push("bus.first_read");
            }
        }
        if let Some(&(_, value)) = self.stuck.iter().find(|(o, _)| *o == offset) {
            return value;
        }
        self.words[offset / 8]
    }

    fn write_word(&mut self, offset: usize, value: u64) {
        self.words[offset / 8] = value;
        self.writes[offset / 8] += 1;
    }

    fn address_of(&self, offset: usize) -> u64 {
        self.base + offset as u64
    }
}

// =============================================================================
// CACHE SIMULADA
// =============================================================================

/// Cache simulada: só registra as operações de manutenção.
pub struct SimCache {
    pub clears: usize,
    /// Intervalos (offset, len) de writeback-and-invalidate, na ordem.
    pub flushes: Vec<(usize, usize)>,
    log: Option<EventLog>,
}

impl SimCache {
    pub fn new() -> Self {
        Self {
            clears: 0,
            flushes: Vec::new(),
            log: None,
        }
    }

    pub fn with_log(log: &EventLog) -> Self {
        let mut cache = Self::new();
        cache.log = Some(Rc::clone(log));
        cache
    }
}

impl CacheMaintenance for SimCache {
    fn clear_data_cache(&mut self) {
        self.clears += 1;
        if let Some(log) = &self.log {
            log.borrow_mut().push("cache.clear");
        }
    }

    fn writeback_invalidate(&mut self, offset: usize, len: usize) {
        self.flushes.push((offset, len));
        if let Some(log) = &self.log {
            log.borrow_mut().push("cache.wbinv");
        }
    }
}

// =============================================================================
// ENGINE DE TRANSFERÊNCIA SIMULADO
// =============================================================================

/// Engine simulado: registra transferências e responde ocupado por
/// `latency` consultas após cada disparo.
pub struct SimEngine {
    /// Transferências programadas: (dram_offset, private_offset, len).
    pub transfers: Vec<(u32, u32, u32)>,
    /// Consultas de status restantes até reportar ocioso.
    remaining: u32,
    /// Consultas respondidas como ocupado, antes de concluir.
    pub latency: u32,
    /// Total de consultas de status.
    pub polls: usize,
    /// Engine travado: responde ocupado para sempre.
    pub stuck_busy: bool,
    log: Option<EventLog>,
}

impl SimEngine {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
            remaining: 0,
            latency: 3,
            polls: 0,
            stuck_busy: false,
            log: None,
        }
    }

    pub fn with_log(log: &EventLog) -> Self {
        let mut engine = Self::new();
        engine.log = Some(Rc::clone(log));
        engine
    }
}

impl TransferEngine for SimEngine {
    fn copy_to_private(&mut self, dram_offset: u32, private_offset: u32, len: u32) {
        self.transfers.push((dram_offset, private_offset, len));
        self.remaining = self.latency;
        if let Some(log) = &self.log {
            log.borrow_mut().push("dma.start");
        }
    }

    fn is_busy(&mut self) -> bool {
        self.polls += 1;
        if self.stuck_busy {
            return true;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            return true;
        }
        false
    }
}

// =============================================================================
// CANAL DE DIAGNÓSTICO SIMULADO
// =============================================================================

/// Captura de relatórios do motor.
pub struct SimDiag {
    pub reports: Vec<(String, Vec<u64>)>,
}

impl SimDiag {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    /// Relatórios com uma mensagem específica, na ordem de emissão.
    pub fn with_msg(&self, msg: &str) -> Vec<&Vec<u64>> {
        self.reports
            .iter()
            .filter(|(m, _)| m == msg)
            .map(|(_, v)| v)
            .collect()
    }
}

impl DiagSink for SimDiag {
    fn report(&mut self, msg: &str, values: &[u64]) {
        self.reports.push((msg.to_string(), values.to_vec()));
    }
}
