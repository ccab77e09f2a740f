// =============================================================================
// SISTEMA DE LOGS - ZERO OVERHEAD
// =============================================================================
//
// Logs de orquestração do diagnóstico, com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Apenas strings literais e valores em hexadecimal
// - SEM alocação
// - Escreve no canal de diagnóstico (drivers::diag)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada operação)
//
// COMO USAR:
//   kinfo!("(VI) Inicializando...");           // Apenas string
//   kinfo!("(MEM) Tamanho=", memsize);         // String + hex
//   kdebug!("Janela=", addr, size);            // String + vários valores
//
// IMPORTANTE: os RELATÓRIOS do motor de verificação (erros de zero-check,
// mismatches, progresso) não passam por aqui. Eles saem pelo trait
// DiagSink e são o produto do diagnóstico — nunca são filtrados.
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// kerror! - Sempre ativo (exceto com no_logs)
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_ERROR);
        $crate::drivers::diag::emit_str($msg);
        $crate::drivers::diag::emit_nl();
    }};
    ($msg:expr $(, $val:expr)+ $(,)?) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_ERROR);
        $crate::drivers::diag::emit_str($msg);
        $(
            $crate::drivers::diag::emit_hex($val as u64);
            $crate::drivers::diag::emit_str(" ");
        )+
        $crate::drivers::diag::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_WARN);
        $crate::drivers::diag::emit_str($msg);
        $crate::drivers::diag::emit_nl();
    }};
    ($msg:expr $(, $val:expr)+ $(,)?) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_WARN);
        $crate::drivers::diag::emit_str($msg);
        $(
            $crate::drivers::diag::emit_hex($val as u64);
            $crate::drivers::diag::emit_str(" ");
        )+
        $crate::drivers::diag::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(any(feature = "log_info", feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_INFO);
        $crate::drivers::diag::emit_str($msg);
        $crate::drivers::diag::emit_nl();
    }};
    ($msg:expr $(, $val:expr)+ $(,)?) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_INFO);
        $crate::drivers::diag::emit_str($msg);
        $(
            $crate::drivers::diag::emit_hex($val as u64);
            $crate::drivers::diag::emit_str(" ");
        )+
        $crate::drivers::diag::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_info", feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_debug", feature = "log_trace"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_DEBUG);
        $crate::drivers::diag::emit_str($msg);
        $crate::drivers::diag::emit_nl();
    }};
    ($msg:expr $(, $val:expr)+ $(,)?) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_DEBUG);
        $crate::drivers::diag::emit_str($msg);
        $(
            $crate::drivers::diag::emit_hex($val as u64);
            $crate::drivers::diag::emit_str(" ");
        )+
        $crate::drivers::diag::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_debug", feature = "log_trace")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_TRACE);
        $crate::drivers::diag::emit_str($msg);
        $crate::drivers::diag::emit_nl();
    }};
    ($msg:expr $(, $val:expr)+ $(,)?) => {{
        $crate::drivers::diag::emit_str($crate::core::logging::P_TRACE);
        $crate::drivers::diag::emit_str($msg);
        $(
            $crate::drivers::diag::emit_hex($val as u64);
            $crate::drivers::diag::emit_str(" ");
        )+
        $crate::drivers::diag::emit_nl();
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}
