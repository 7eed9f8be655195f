// ============================================================================
// Wide Unsigned Integer
// Fixed-width unsigned integers stored as little-limb-first u64 arrays
// ============================================================================

use core::fmt;

/// Fixed-width unsigned integer of `64 × LIMBS` bits.
///
/// Limbs are stored little-limb-first: `limbs[0]` holds the least
/// significant 64 bits. Only division by a small divisor is provided, which
/// is all decimal and hexadecimal rendering needs.
///
/// # Type Parameter
/// - `LIMBS`: Number of 64-bit limbs (1-4). `U64` and `U256` cover the
///   widths the formatters are sized for; anything wider fails to compile.
///
/// # Example
/// ```ignore
/// use amount_fmt::numeric::U256;
///
/// let wei = U256::from_be_bytes(&calldata[4..36]);
/// let mut digits = U256Digits::new();
/// digits.fill_from(&wei);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WideUint<const LIMBS: usize>([u64; LIMBS]);

// ============================================================================
// Width Constants
// ============================================================================

/// Number of decimal digits needed for the largest value of `bits` width.
///
/// `ceil(bits × log10(2))`, with log10(2) approximated as 0.30103. Exact for
/// every multiple of 64 up to 256.
pub const fn max_decimal_digits(bits: usize) -> usize {
    (bits * 30_103 + 99_999) / 100_000
}

impl<const L: usize> WideUint<L> {
    /// Width in bits.
    pub const BITS: usize = 64 * L;

    /// Maximum number of decimal digits of any value of this width.
    pub const MAX_DIGITS: usize = max_decimal_digits(64 * L);

    /// Zero value
    pub const ZERO: Self = Self::from_limbs([0; L]);

    /// Maximum representable value
    pub const MAX: Self = Self::from_limbs([u64::MAX; L]);

    const SUPPORTED_WIDTH: () = assert!(L >= 1 && L <= 4, "WideUint supports 1 to 4 limbs");

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from little-limb-first limbs.
    #[inline]
    pub const fn from_limbs(limbs: [u64; L]) -> Self {
        let () = Self::SUPPORTED_WIDTH;
        Self(limbs)
    }

    /// Create from a single `u64`, zero-extended.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0; L];
        limbs[0] = value;
        Self::from_limbs(limbs)
    }

    /// Create from a big-endian byte view.
    ///
    /// Shorter inputs are zero-extended. Longer inputs keep the trailing
    /// (least significant) bytes that fit.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; L];
        for (i, &byte) in bytes.iter().rev().take(8 * L).enumerate() {
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        Self::from_limbs(limbs)
    }

    /// Create from a little-endian byte view.
    ///
    /// Shorter inputs are zero-extended. Longer inputs keep the leading
    /// (least significant) bytes that fit.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let mut limbs = [0u64; L];
        for (i, &byte) in bytes.iter().take(8 * L).enumerate() {
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        Self::from_limbs(limbs)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Little-limb-first view of the value.
    #[inline]
    pub const fn limbs(&self) -> &[u64; L] {
        &self.0
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Divide in place by a small divisor and return the remainder.
    ///
    /// Long division from the most significant limb down. Each limb is
    /// processed as two 32-bit halves so every step is a 64-by-32-bit
    /// division; the running remainder is always `< divisor`, so
    /// `remainder << 32 | half` never overflows a u64.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        let divisor = divisor as u64;
        let mut rem = 0u64;

        for limb in self.0.iter_mut().rev() {
            let high = (rem << 32) | (*limb >> 32);
            let q_high = high / divisor;
            rem = high % divisor;

            let low = (rem << 32) | (*limb & 0xFFFF_FFFF);
            let q_low = low / divisor;
            rem = low % divisor;

            *limb = (q_high << 32) | q_low;
        }

        rem as u32
    }
}

// ============================================================================
// Type Aliases for Supported Widths
// ============================================================================

/// 64-bit unsigned integer (one limb)
pub type U64 = WideUint<1>;

/// 256-bit unsigned integer (four limbs)
pub type U256 = WideUint<4>;

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const L: usize> Default for WideUint<L> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const L: usize> From<u64> for WideUint<L> {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const L: usize> From<u32> for WideUint<L> {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_u64(value as u64)
    }
}

impl From<u128> for U256 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl<const L: usize> fmt::Debug for WideUint<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideUint<{}>(0x", L)?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Tests
// ============================================================================
