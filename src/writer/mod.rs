// ============================================================================
// Writer Module
// Bounded output cursor and the truncation error it reports
// ============================================================================

mod bounded;
mod errors;

pub use bounded::BoundedWriter;
pub use errors::{FormatError, FormatResult};

use core::ffi::CStr;

/// Read back a NUL-terminated string produced by this crate.
///
/// Returns `None` if `buf` holds no terminator or the text before it is not
/// valid UTF-8.
pub fn terminated_str(buf: &[u8]) -> Option<&str> {
    CStr::from_bytes_until_nul(buf).ok()?.to_str().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_str() {
        assert_eq!(terminated_str(b"1.5\0junk"), Some("1.5"));
        assert_eq!(terminated_str(b"\0"), Some(""));
        assert_eq!(terminated_str(b"no terminator"), None);
        assert_eq!(terminated_str(b""), None);
    }
}
