// ============================================================================
// Hex Encoder
// Byte slices to upper- or lower-case hexadecimal
// ============================================================================

use super::config::HexCase;
use crate::writer::{BoundedWriter, FormatResult};

/// Encode `bytes` as hex into `dest`, two characters per byte.
///
/// If the whole encoding does not fit, as many complete byte pairs as fit
/// are kept and the string is still terminated inside `dest`.
///
/// # Errors
/// Returns `Truncated` if `dest` is shorter than `2 × bytes.len() + 1`.
pub fn hex_encode(bytes: &[u8], case: HexCase, dest: &mut [u8]) -> FormatResult<usize> {
    let alphabet = case.alphabet();
    let mut out = BoundedWriter::new(dest);

    for &byte in bytes {
        out.push_slice(&[
            alphabet[(byte >> 4) as usize],
            alphabet[(byte & 0x0f) as usize],
        ]);
        if out.is_truncated() {
            break;
        }
    }

    out.finish()
}

/// Upper-case hex of `bytes`.
#[inline]
pub fn bin_to_hex(bytes: &[u8], dest: &mut [u8]) -> FormatResult<usize> {
    hex_encode(bytes, HexCase::Upper, dest)
}

/// Lower-case hex of `bytes`.
#[inline]
pub fn bin_to_hex_lc(bytes: &[u8], dest: &mut [u8]) -> FormatResult<usize> {
    hex_encode(bytes, HexCase::Lower, dest)
}
