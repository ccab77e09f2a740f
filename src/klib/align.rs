//! # Funções de Alinhamento de Memória
//!
//! Funções utilitárias para alinhamento de endereços e valores. O motor de
//! verificação só anda em granularidade de palavra; os invariantes de
//! entrada são checados com estas funções.

/// Alinha um valor para cima ao próximo múltiplo de `align`.
#[inline(always)]
pub const fn align_up(val: usize, align: usize) -> usize {
    (val + align - 1) & !(align - 1)
}

/// Alinha um valor para baixo ao múltiplo anterior de `align`.
#[inline(always)]
pub const fn align_down(val: usize, align: usize) -> usize {
    val & !(align - 1)
}

/// Verifica se um valor está alinhado a `align` (potência de dois).
#[inline(always)]
pub const fn is_aligned(val: usize, align: usize) -> bool {
    val & (align - 1) == 0
}

// =============================================================================
// TESTS
// =============================================================================
