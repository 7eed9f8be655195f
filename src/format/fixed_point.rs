// ============================================================================
// Fixed-Point Formatter
// Splits a decimal digit sequence into integer and fractional parts
// ============================================================================

use super::config::FractionPolicy;
use crate::numeric::{DigitBuffer, U256Digits, WideUint};
use crate::writer::{BoundedWriter, FormatResult};

/// Write `digits` with the last `scale` digits as the fraction.
///
/// - More digits than `scale`: the leading digits form the integer part.
/// - Otherwise: the integer part is `0` and the fraction is left-padded
///   with zeros to `scale` digits.
/// - `scale == 0`: no decimal point.
///
/// The digits are re-partitioned, never rounded. Failures are recorded in
/// the writer's truncation flag.
pub fn write_fixed_point<const N: usize>(
    digits: &DigitBuffer<N>,
    scale: u8,
    policy: FractionPolicy,
    out: &mut BoundedWriter<'_>,
) {
    let digits = digits.as_bytes();
    let scale = scale as usize;

    if scale == 0 {
        out.push_slice(digits);
        return;
    }

    let (integer, fraction, padding) = if digits.len() > scale {
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        (integer, fraction, 0)
    } else {
        (&b"0"[..], digits, scale - digits.len())
    };

    let (fraction, padding) = match policy {
        FractionPolicy::FixedWidth => (fraction, padding),
        FractionPolicy::Trimmed => match fraction.iter().rposition(|&d| d != b'0') {
            Some(last) => (&fraction[..=last], padding),
            // The padding is all zeros too
            None => (&fraction[..0], 0),
        },
    };

    out.push_slice(integer);
    if fraction.is_empty() && padding == 0 {
        return;
    }
    out.push(b'.');
    out.fill(b'0', padding);
    out.push_slice(fraction);
}

/// Render `value` with `scale` fractional digits into `dest`.
///
/// Output is all-or-nothing: if it does not fit together with its NUL,
/// `dest` is left holding the empty string.
///
/// # Errors
/// Returns `Truncated` if the output does not fit.
///
/// # Example
/// ```ignore
/// let mut buf = [0u8; 32];
/// let n = decimal_with_scale(&U64::from(1_500_000_000u64), 9, FractionPolicy::Trimmed, &mut buf)?;
/// assert_eq!(&buf[..n], b"1.5");
/// ```
pub fn decimal_with_scale<const L: usize>(
    value: &WideUint<L>,
    scale: u8,
    policy: FractionPolicy,
    dest: &mut [u8],
) -> FormatResult<usize> {
    let mut digits = U256Digits::new();
    digits.fill_from(value);

    let mut out = BoundedWriter::new(dest);
    write_fixed_point(&digits, scale, policy, &mut out);
    out.finish_all_or_nothing()
}

/// Render `value` as a plain decimal integer into `dest`.
///
/// # Errors
/// Returns `Truncated` if the digits and NUL do not fit; `dest` then holds
/// the empty string.
pub fn decimal_plain<const L: usize>(value: &WideUint<L>, dest: &mut [u8]) -> FormatResult<usize> {
    decimal_with_scale(value, 0, FractionPolicy::Trimmed, dest)
}
