//! Fixed-width big-endian fields and a bounds-checked reader.
//!
//! All multi-byte integers on the wire are big-endian. Length prefixes are
//! signed 32-bit integers; negative values are malformed.

use cellcodec_foundation::{Error, ErrorKind, FrameDefect, Result};

/// Size of a length prefix or scale field.
pub const INT_SIZE: usize = 4;

/// Size of a 64-bit field.
pub const LONG_SIZE: usize = 8;

/// Appends a big-endian `i32`.
pub fn put_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Appends a big-endian `i64`.
pub fn put_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Converts a payload length to its 32-bit prefix.
///
/// # Errors
///
/// Returns `PayloadTooLarge` if the length does not fit in an `i32`.
pub fn len_prefix(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| Error::new(ErrorKind::PayloadTooLarge(len)))
}

/// Appends a 32-bit length prefix followed by the bytes.
///
/// # Errors
///
/// Returns `PayloadTooLarge` if the slice is longer than `i32::MAX`.
pub fn put_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) -> Result<()> {
    put_i32(out, len_prefix(bytes.len())?);
    out.extend_from_slice(bytes);
    Ok(())
}

/// Cursor over an input slice. Reads never panic; running past the end
/// yields a truncation error and leaves the cursor where it was.
#[derive(Clone, Debug)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader positioned at the start of `buf`.
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns true if every byte has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(Error::truncated(n, available));
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads a fixed-size array.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` at end of input.
    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// Reads a big-endian `i32`.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if fewer than four bytes remain.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_be_bytes)
    }

    /// Reads a big-endian `i64`.
    ///
    /// # Errors
    ///
    /// Returns `Truncated` if fewer than eight bytes remain.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_array().map(i64::from_be_bytes)
    }

    /// Reads a length prefix and checks it against the remaining input
    /// and `limit`, without consuming the payload.
    ///
    /// # Errors
    ///
    /// Returns `NegativeLength`, `LimitExceeded` or `LengthExceedsInput`.
    pub fn read_len(&mut self, limit: usize) -> Result<usize> {
        let raw = self.read_i32()?;
        let declared =
            usize::try_from(raw).map_err(|_| Error::malformed(FrameDefect::NegativeLength(raw)))?;
        if declared > limit {
            return Err(Error::new(ErrorKind::LimitExceeded { declared, limit }));
        }
        let available = self.remaining();
        if declared > available {
            return Err(Error::malformed(FrameDefect::LengthExceedsInput {
                declared,
                available,
            }));
        }
        Ok(declared)
    }

    /// Reads a length prefix and the payload it describes.
    ///
    /// # Errors
    ///
    /// See [`ByteReader::read_len`].
    pub fn read_len_prefixed(&mut self, limit: usize) -> Result<&'a [u8]> {
        let len = self.read_len(limit)?;
        self.read_bytes(len)
    }
}
