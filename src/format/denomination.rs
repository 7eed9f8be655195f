// ============================================================================
// Denomination Renderers
// Named entry points with the scale and fraction policy fixed per call site
// ============================================================================
//
// Which denomination trims and which keeps a fixed-width fraction is a
// product decision, so each one gets its own function instead of a flag.

use super::config::Denomination;
use super::fixed_point::{decimal_plain, decimal_with_scale, write_fixed_point};
use crate::numeric::{U64Digits, WideUint, U256, U64};
use crate::writer::{BoundedWriter, FormatResult};

impl Denomination {
    /// Render `value` in this denomination into `dest`.
    ///
    /// # Errors
    /// Returns `Truncated` if the output does not fit; `dest` then holds the
    /// empty string.
    #[inline]
    pub fn format<const L: usize>(&self, value: &WideUint<L>, dest: &mut [u8]) -> FormatResult<usize> {
        decimal_with_scale(value, self.scale, self.policy, dest)
    }
}

// ============================================================================
// Native Coin (X/P-chain)
// ============================================================================

/// nAVAX as AVAX, trailing zeros trimmed: `1500000000` → `"1.5"`.
pub fn nano_avax_to_string(nano_avax: u64, dest: &mut [u8]) -> FormatResult<usize> {
    Denomination::NANO_AVAX.format(&U64::from(nano_avax), dest)
}

// ============================================================================
// EVM Amounts (C-chain)
// ============================================================================

/// wei as gwei with a fixed 9-digit fraction: `1500000000` → `"1.500000000"`.
pub fn wei_to_gwei_string(wei: u64, dest: &mut [u8]) -> FormatResult<usize> {
    Denomination::GWEI.format(&U64::from(wei), dest)
}

/// 256-bit wei as gwei with a fixed 9-digit fraction.
pub fn wei_to_gwei_string_256(wei: &U256, dest: &mut [u8]) -> FormatResult<usize> {
    Denomination::GWEI.format(wei, dest)
}

/// wei as navax, trailing zeros trimmed.
pub fn wei_to_navax_string(wei: u64, dest: &mut [u8]) -> FormatResult<usize> {
    Denomination::NAVAX.format(&U64::from(wei), dest)
}

/// 256-bit wei as navax, trailing zeros trimmed.
pub fn wei_to_navax_string_256(wei: &U256, dest: &mut [u8]) -> FormatResult<usize> {
    Denomination::NAVAX.format(wei, dest)
}

/// 256-bit wei as AVAX (18 decimals), trailing zeros trimmed.
pub fn wei_to_avax_string_256(wei: &U256, dest: &mut [u8]) -> FormatResult<usize> {
    Denomination::AVAX_WEI.format(wei, dest)
}

// ============================================================================
// Other Renderers
// ============================================================================

/// Validator delegation fee, given in parts per million, as a percentage.
///
/// `20000` → `"2%"`, `12345` → `"1.2345%"`. The suffix is part of the
/// all-or-nothing output.
pub fn delegation_fee_to_string(fee_ppm: u32, dest: &mut [u8]) -> FormatResult<usize> {
    let mut digits = U64Digits::new();
    digits.fill_from(&U64::from(fee_ppm));

    let fee = Denomination::DELEGATION_FEE_PERCENT;
    let mut out = BoundedWriter::new(dest);
    write_fixed_point(&digits, fee.scale, fee.policy, &mut out);
    out.push(b'%');
    out.finish_all_or_nothing()
}

/// Plain decimal integer.
#[inline]
pub fn number_to_string(number: u64, dest: &mut [u8]) -> FormatResult<usize> {
    decimal_plain(&U64::from(number), dest)
}

/// Copy static or user-facing text verbatim, cut at `dest.len() - 1`.
///
/// Unlike the numeric renderers, a truncated copy keeps the prefix that fit.
pub fn copy_string(src: &str, dest: &mut [u8]) -> FormatResult<usize> {
    let mut out = BoundedWriter::new(dest);
    out.copy_str(src);
    out.finish()
}
