// ============================================================================
// Bounded Writer
// Capacity-checked output cursor over a caller-owned byte buffer
// ============================================================================

use super::errors::{FormatError, FormatResult};
use core::fmt;

/// Cursor over a fixed-capacity destination.
///
/// One byte of the destination is always reserved for the terminating NUL,
/// so at most `capacity - 1` characters are ever written. Appends are
/// all-or-nothing: an append that does not fit writes nothing and sets a
/// sticky truncation flag, after which every further append is a no-op.
/// Callers check the flag once, through [`BoundedWriter::finish`] or
/// [`BoundedWriter::finish_all_or_nothing`].
///
/// # Example
/// ```ignore
/// let mut buf = [0u8; 8];
/// let mut out = BoundedWriter::new(&mut buf);
/// out.push_slice(b"0.5");
/// assert_eq!(out.finish(), Ok(3));
/// ```
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Wrap a destination buffer. The cursor starts at 0.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            len: 0,
            truncated: false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Declared capacity of the destination, terminator included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Characters written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Characters that can still be appended while leaving room for the NUL.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(1) - self.len
    }

    /// True once any append has failed.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Characters written so far, without the terminator.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    // ========================================================================
    // Appends
    // ========================================================================

    /// Append one character.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.push_slice(&[byte]);
    }

    /// Append all of `bytes`, or nothing.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        if self.truncated || bytes.len() > self.remaining() {
            self.truncated = true;
            return;
        }
        self.buf[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }

    /// Append `byte` repeated `count` times, or nothing.
    pub fn fill(&mut self, byte: u8, count: usize) {
        if self.truncated || count > self.remaining() {
            self.truncated = true;
            return;
        }
        self.buf[self.len..self.len + count].fill(byte);
        self.len += count;
    }

    /// Copy unstructured text verbatim, stopping at `capacity - 1`.
    ///
    /// Unlike [`BoundedWriter::push_slice`] this keeps the prefix that fits,
    /// cut back to a UTF-8 character boundary. The flag is set if `src` did
    /// not fit entirely.
    pub fn copy_str(&mut self, src: &str) {
        if self.truncated {
            return;
        }
        let mut take = src.len().min(self.remaining());
        while !src.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&src.as_bytes()[..take]);
        self.len += take;
        if take < src.len() {
            self.truncated = true;
        }
    }

    // ========================================================================
    // Termination
    // ========================================================================

    /// Terminate the string at the cursor.
    ///
    /// Complete appends made before a failure are kept.
    ///
    /// # Errors
    /// Returns `Truncated` if any append failed, or if the destination has
    /// no room even for the terminator.
    pub fn finish(mut self) -> FormatResult<usize> {
        let capacity = self.buf.len();
        if capacity == 0 {
            tracing::debug!(capacity, "no room for terminator");
            return Err(FormatError::Truncated);
        }

        self.buf[self.len] = 0;
        if self.truncated {
            tracing::debug!(capacity, kept = self.len, "output truncated");
            Err(FormatError::Truncated)
        } else {
            Ok(self.len)
        }
    }

    /// Terminate the string, discarding everything on truncation.
    ///
    /// On failure the destination holds the empty string and the bytes
    /// written before the failure are zeroed.
    ///
    /// # Errors
    /// Returns `Truncated` under the same conditions as [`BoundedWriter::finish`].
    pub fn finish_all_or_nothing(mut self) -> FormatResult<usize> {
        if self.truncated {
            self.buf[..self.len].fill(0);
            self.len = 0;
        }
        self.finish()
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_slice(s.as_bytes());
        if self.truncated {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn test_push_and_finish() {
        let mut buf = [0xAAu8; 6];
        let mut out = BoundedWriter::new(&mut buf);
        out.push(b'1');
        out.push_slice(b".25");
        assert_eq!(out.len(), 4);
        assert_eq!(out.remaining(), 1);
        assert_eq!(out.written(), b"1.25");
        assert_eq!(out.finish(), Ok(4));
        assert_eq!(&buf[..5], b"1.25\0");
        assert_eq!(buf[5], 0xAA);
    }

    #[test]
    fn test_exact_fit_leaves_room_for_terminator() {
        let mut buf = [0u8; 4];
        let mut out = BoundedWriter::new(&mut buf);
        out.push_slice(b"abc");
        assert!(!out.is_truncated());
        assert_eq!(out.finish(), Ok(3));
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn test_push_slice_is_all_or_nothing() {
        let mut buf = [0xAAu8; 4];
        let mut out = BoundedWriter::new(&mut buf);
        out.push_slice(b"ab");
        out.push_slice(b"cd");
        assert!(out.is_truncated());
        assert_eq!(out.written(), b"ab");
        assert_eq!(out.finish(), Err(FormatError::Truncated));
        assert_eq!(&buf, b"ab\0\xAA");
    }

    #[test]
    fn test_truncation_is_sticky() {
        let mut buf = [0u8; 4];
        let mut out = BoundedWriter::new(&mut buf);
        out.push_slice(b"toolong");
        out.push(b'x');
        assert!(out.is_empty());
        assert!(out.is_truncated());
    }

    #[test]
    fn test_fill() {
        let mut buf = [0u8; 5];
        let mut out = BoundedWriter::new(&mut buf);
        out.fill(b'0', 3);
        out.fill(b'0', 2);
        assert_eq!(out.written(), b"000");
        assert_eq!(out.finish(), Err(FormatError::Truncated));
    }

    #[test]
    fn test_finish_all_or_nothing_clears() {
        let mut buf = [0xAAu8; 4];
        let mut out = BoundedWriter::new(&mut buf);
        out.push_slice(b"12");
        out.push_slice(b"34");
        assert_eq!(out.finish_all_or_nothing(), Err(FormatError::Truncated));
        assert_eq!(&buf, b"\0\0\xAA\xAA");
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf = [0u8; 0];
        let mut out = BoundedWriter::new(&mut buf);
        assert_eq!(out.remaining(), 0);
        out.push(b'x');
        assert_eq!(out.finish(), Err(FormatError::Truncated));
    }

    #[test]
    fn test_capacity_one_holds_empty_string() {
        let mut buf = [0xAAu8; 1];
        let out = BoundedWriter::new(&mut buf);
        assert_eq!(out.finish(), Ok(0));
        assert_eq!(buf, [0]);
    }

    #[test]
    fn test_copy_str_stops_at_capacity_minus_one() {
        let mut buf = [0xAAu8; 5];
        let mut out = BoundedWriter::new(&mut buf);
        out.copy_str("Avalanche");
        assert_eq!(out.finish(), Err(FormatError::Truncated));
        assert_eq!(&buf, b"Aval\0");
    }

    #[test]
    fn test_copy_str_fits() {
        let mut buf = [0u8; 16];
        let mut out = BoundedWriter::new(&mut buf);
        out.copy_str("Transfer");
        assert_eq!(out.finish(), Ok(8));
    }

    #[test]
    fn test_copy_str_respects_char_boundary() {
        // "é" is two bytes; only one byte of room remains after "a"
        let mut buf = [0u8; 3];
        let mut out = BoundedWriter::new(&mut buf);
        out.copy_str("aé");
        assert_eq!(out.written(), b"a");
        assert!(out.is_truncated());
    }

    #[test]
    fn test_fmt_write() {
        let mut buf = [0u8; 16];
        let mut out = BoundedWriter::new(&mut buf);
        write!(out, "{}-{}", 12, "ab").unwrap();
        assert_eq!(out.finish(), Ok(5));
        assert_eq!(&buf[..6], b"12-ab\0");
    }

    #[test]
    fn test_fmt_write_overflow() {
        let mut buf = [0u8; 4];
        let mut out = BoundedWriter::new(&mut buf);
        assert!(write!(out, "{}", 123_456).is_err());
        assert!(out.is_truncated());
    }
}
