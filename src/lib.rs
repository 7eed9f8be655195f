// ============================================================================
// Amount Formatting Library
// Heap-free rendering of 64/256-bit token amounts and byte blobs
// ============================================================================

//! # Amount Fmt
//!
//! Renders blockchain integer quantities as decimal strings and raw bytes as
//! hexadecimal, into caller-owned fixed-size buffers.
//!
//! ## Features
//!
//! - **`no_std`, no heap**: all scratch space is on the stack with a
//!   compile-time bound
//! - **64- and 256-bit values** via limb-wise division by small constants,
//!   no floating point
//! - **Denomination scaling** with trimmed or fixed-width fractions
//! - **Bounded output**: every string is NUL-terminated inside the buffer,
//!   and overflow is reported as [`FormatError::Truncated`]
//!
//! ## Example
//!
//! ```rust
//! use amount_fmt::prelude::*;
//!
//! let mut buf = [0u8; 32];
//! let n = nano_avax_to_string(1_500_000_000, &mut buf).unwrap();
//! assert_eq!(&buf[..n], b"1.5");
//!
//! let wei = U256::from(25_000_000_000u64);
//! wei_to_gwei_string_256(&wei, &mut buf).unwrap();
//! assert_eq!(terminated_str(&buf), Some("25.000000000"));
//!
//! let n = hex_encode(&[0x0A, 0xFF], HexCase::Lower, &mut buf).unwrap();
//! assert_eq!(&buf[..n], b"0aff");
//!
//! let mut small = [0u8; 3];
//! assert_eq!(
//!     nano_avax_to_string(1_500_000_000, &mut small),
//!     Err(FormatError::Truncated)
//! );
//! ```

#![cfg_attr(not(test), no_std)]

pub mod format;
pub mod numeric;
pub mod writer;

pub use writer::{FormatError, FormatResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::format::{
        bin_to_hex, bin_to_hex_lc, copy_string, decimal_plain, decimal_with_scale,
        delegation_fee_to_string, hex_encode, nano_avax_to_string, number_to_string,
        wei_to_avax_string_256, wei_to_gwei_string, wei_to_gwei_string_256, wei_to_navax_string,
        wei_to_navax_string_256, Denomination, FractionPolicy, HexCase,
    };
    pub use crate::numeric::{WideUint, U256, U64};
    pub use crate::writer::{terminated_str, BoundedWriter, FormatError, FormatResult};
}
