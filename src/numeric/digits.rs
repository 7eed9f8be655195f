// ============================================================================
// Decimal Digit Buffer
// Stack-allocated decimal expansion of a WideUint
// ============================================================================

use super::wide_uint::{WideUint, U256, U64};
use arrayvec::ArrayVec;

/// Capacity needed for any 64-bit value.
pub const MAX_DIGITS_U64: usize = U64::MAX_DIGITS;

/// Capacity needed for any 256-bit value.
pub const MAX_DIGITS_U256: usize = U256::MAX_DIGITS;

/// Fixed-capacity buffer of ASCII decimal digits.
///
/// Filled by [`DigitBuffer::fill_from`], which emits digits least
/// significant first and then reverses them, so [`DigitBuffer::as_bytes`]
/// always reads most significant digit first.
#[derive(Debug, Clone)]
pub struct DigitBuffer<const N: usize = { MAX_DIGITS_U256 }> {
    digits: ArrayVec<u8, N>,
}

/// Digit buffer sized for 64-bit values
pub type U64Digits = DigitBuffer<MAX_DIGITS_U64>;

/// Digit buffer sized for 256-bit values
pub type U256Digits = DigitBuffer<MAX_DIGITS_U256>;

impl<const N: usize> DigitBuffer<N> {
    /// Create an empty buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            digits: ArrayVec::new_const(),
        }
    }

    /// Replace the contents with the minimal decimal expansion of `value`.
    ///
    /// Zero expands to the single digit `"0"`.
    ///
    /// # Panics
    /// Panics if `N` is smaller than `WideUint::<L>::MAX_DIGITS`. A short
    /// scratch buffer is a caller bug, not a runtime condition.
    pub fn fill_from<const L: usize>(&mut self, value: &WideUint<L>) {
        assert!(
            WideUint::<L>::MAX_DIGITS <= N,
            "digit buffer of {} cannot hold a {}-bit value",
            N,
            WideUint::<L>::BITS
        );

        self.digits.clear();
        let mut rest = *value;
        loop {
            let digit = rest.div_rem_small(10) as u8;
            self.digits.push(b'0' + digit);
            if rest.is_zero() {
                break;
            }
        }
        self.digits.reverse();
    }

    /// Digits, most significant first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True before the first `fill_from`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Capacity of the buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for DigitBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
