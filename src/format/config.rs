// ============================================================================
// Denomination Configuration
// Scale and fractional-digit policy for each rendered denomination
// ============================================================================

use crate::numeric::MAX_DIGITS_U256;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Fraction Policy
// ============================================================================

/// How the fractional part of a scaled decimal is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionPolicy {
    /// Strip trailing zeros; drop the decimal point if nothing is left
    /// - 1500000000 at scale 9 → "1.5"
    /// - Use case: nAVAX / navax amounts
    Trimmed,

    /// Always emit exactly `scale` fractional digits
    /// - 1500000000 at scale 9 → "1.500000000"
    /// - Use case: gwei gas prices shown at fixed width
    FixedWidth,
}

impl FractionPolicy {
    /// Policy selected by a `trim_trailing_zeros` flag
    #[inline]
    pub const fn from_trim_flag(trim_trailing_zeros: bool) -> Self {
        if trim_trailing_zeros {
            FractionPolicy::Trimmed
        } else {
            FractionPolicy::FixedWidth
        }
    }
}

// ============================================================================
// Hex Case
// ============================================================================

/// Letter case of hex digits A-F
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HexCase {
    /// `0123456789ABCDEF`
    #[default]
    Upper,
    /// `0123456789abcdef`
    Lower,
}

impl HexCase {
    /// The 16-entry digit table for this case
    #[inline]
    pub const fn alphabet(self) -> &'static [u8; 16] {
        match self {
            HexCase::Upper => b"0123456789ABCDEF",
            HexCase::Lower => b"0123456789abcdef",
        }
    }
}

// ============================================================================
// Denomination
// ============================================================================

/// A display denomination: how many trailing digits of the raw integer are
/// fractional, and how that fraction is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Denomination {
    /// Number of fractional digits (0 renders a plain integer)
    pub scale: u8,

    /// Trailing-zero policy for the fraction
    pub policy: FractionPolicy,
}

impl Denomination {
    /// Create a denomination.
    ///
    /// # Panics
    /// Panics if `scale` exceeds the digit count of a 256-bit value. For the
    /// preset constants this is checked at compile time.
    pub const fn new(scale: u8, policy: FractionPolicy) -> Self {
        assert!(
            scale as usize <= MAX_DIGITS_U256,
            "scale exceeds the digits of a 256-bit value"
        );
        Self { scale, policy }
    }

    /// Builder method: Replace the fraction policy
    pub const fn with_policy(mut self, policy: FractionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

// ============================================================================
// Preset Denominations
// ============================================================================

impl Denomination {
    /// Whole units, no fraction
    pub const INTEGER: Self = Self::new(0, FractionPolicy::Trimmed);

    /// X/P-chain AVAX held as nAVAX (10^-9 AVAX)
    /// - Trailing zeros trimmed
    pub const NANO_AVAX: Self = Self::new(9, FractionPolicy::Trimmed);

    /// C-chain wei shown as gwei (10^9 wei)
    /// - Fixed 9-digit fraction
    pub const GWEI: Self = Self::new(9, FractionPolicy::FixedWidth);

    /// C-chain wei shown as navax (10^9 wei)
    /// - Trailing zeros trimmed
    pub const NAVAX: Self = Self::new(9, FractionPolicy::Trimmed);

    /// C-chain wei shown as AVAX (10^18 wei)
    /// - Trailing zeros trimmed
    pub const AVAX_WEI: Self = Self::new(18, FractionPolicy::Trimmed);

    /// Validator delegation fee, parts per million shown as percent
    /// - 20000 → "2"
    pub const DELEGATION_FEE_PERCENT: Self = Self::new(4, FractionPolicy::Trimmed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Denomination::NANO_AVAX.scale, 9);
        assert_eq!(Denomination::NANO_AVAX.policy, FractionPolicy::Trimmed);
        assert_eq!(Denomination::GWEI.policy, FractionPolicy::FixedWidth);
        assert_eq!(Denomination::AVAX_WEI.scale, 18);
        assert_eq!(Denomination::INTEGER.scale, 0);
    }

    #[test]
    fn test_builder() {
        let d = Denomination::NAVAX.with_policy(FractionPolicy::FixedWidth);
        assert_eq!(d, Denomination::GWEI);
    }

    #[test]
    fn test_trim_flag() {
        assert_eq!(FractionPolicy::from_trim_flag(true), FractionPolicy::Trimmed);
        assert_eq!(
            FractionPolicy::from_trim_flag(false),
            FractionPolicy::FixedWidth
        );
    }

    #[test]
    fn test_hex_alphabet() {
        assert_eq!(HexCase::Upper.alphabet()[10], b'A');
        assert_eq!(HexCase::Lower.alphabet()[15], b'f');
        assert_eq!(HexCase::default(), HexCase::Upper);
    }

    #[test]
    #[should_panic(expected = "scale exceeds")]
    fn test_oversized_scale() {
        let scale = 79;
        let _ = Denomination::new(scale, FractionPolicy::Trimmed);
    }
}
