// ============================================================================
// Numeric Module
// Wide unsigned integers and their decimal expansion
// ============================================================================
//
// This module provides:
// - WideUint<L>: little-limb-first unsigned integer, 64 × L bits
// - DigitBuffer<N>: stack-allocated decimal digits of a WideUint
// - U64/U256 aliases and the matching digit-buffer sizes
//
// Design principles:
// - No floating-point operations
// - No heap; every buffer has a compile-time capacity
// - Division only by small constants, one 32-bit half-limb at a time

mod digits;
mod wide_uint;

pub use digits::{DigitBuffer, U256Digits, U64Digits, MAX_DIGITS_U256, MAX_DIGITS_U64};
pub use wide_uint::{max_decimal_digits, WideUint, U256, U64};
