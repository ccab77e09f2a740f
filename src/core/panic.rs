//! Panic Handler - Tratamento de pânicos do diagnóstico.
//!
//! Um panic aqui é violação de contrato de programação (invariantes de
//! entrada), nunca falha de memória detectada — falhas detectadas são
//! reportadas e o teste continua. Emite o local do panic pelo canal de
//! diagnóstico e trava a CPU; só um reset externo sai daqui.
//!
//! Compilado fora dos builds de teste no host (o harness de teste traz o
//! handler da std).

#[cfg(not(test))]
use core::panic::PanicInfo;

#[cfg(not(test))]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    crate::kerror!("PANIC no diagnostico");
    if let Some(location) = info.location() {
        // Sem core::fmt: arquivo como string, linha/coluna em hex.
        crate::drivers::diag::emit_str(location.file());
        crate::drivers::diag::emit_str(" ");
        crate::drivers::diag::emit_hex(location.line() as u64);
        crate::drivers::diag::emit_nl();
    }

    loop {
        core::hint::spin_loop();
    }
}
