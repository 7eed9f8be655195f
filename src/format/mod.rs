// ============================================================================
// Format Module
// Fixed-point decimal and hex rendering into bounded buffers
// ============================================================================

pub mod config;
mod denomination;
mod fixed_point;
mod hex;

pub use config::{Denomination, FractionPolicy, HexCase};
pub use denomination::{
    copy_string, delegation_fee_to_string, nano_avax_to_string, number_to_string,
    wei_to_avax_string_256, wei_to_gwei_string, wei_to_gwei_string_256, wei_to_navax_string,
    wei_to_navax_string_256,
};
pub use fixed_point::{decimal_plain, decimal_with_scale, write_fixed_point};
pub use hex::{bin_to_hex, bin_to_hex_lc, hex_encode};
