// ============================================================================
// Format Errors
// Error type for bounded-buffer formatting operations
// ============================================================================

use core::fmt;

/// Errors that can occur while formatting into a bounded buffer.
///
/// Inputs are raw integers or raw bytes and cannot be malformed, so the only
/// failure is running out of room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Output plus its terminating NUL did not fit in the destination
    Truncated,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Truncated => write!(
                f,
                "truncated: output does not fit in the destination buffer"
            ),
        }
    }
}

impl core::error::Error for FormatError {}

/// Result type alias for formatting operations.
///
/// `Ok` carries the number of characters written, excluding the NUL.
pub type FormatResult<T> = Result<T, FormatError>;
