//! Frame decoder.
//!
//! Decoding is fail-closed: every defect in a frame is reported as an
//! error and no partially decoded value is ever returned.

use std::io::Read;
use std::iter::FusedIterator;
use std::sync::Arc;

use cellcodec_foundation::{
    BigInt, Decimal, Error, ErrorContext, ErrorKind, FrameDefect, Result, TypeTag, Value,
};

use crate::config::{CanonicalPolicy, DecodeConfig};
use crate::primitive::{ByteReader, INT_SIZE};

/// Decodes exactly one frame with the default (strict) configuration.
///
/// # Errors
///
/// Returns `UnknownTag`, `UnsupportedKind`, `MalformedFrame` or
/// `NonCanonicalEncoding`; see [`Decoder::decode`].
pub fn decode(bytes: &[u8]) -> Result<Value> {
    Decoder::default().decode(bytes)
}

/// Frame decoder holding a [`DecodeConfig`].
///
/// The decoder has no mutable state and can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    /// Creates a decoder with the given configuration.
    #[must_use]
    pub fn new(config: DecodeConfig) -> Self {
        Self { config }
    }

    /// Returns the decoder configuration.
    #[must_use]
    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes a buffer holding exactly one frame.
    ///
    /// # Errors
    ///
    /// - `MalformedFrame(Empty)` for an empty buffer
    /// - `UnknownTag` if the first byte is not a defined tag
    /// - `UnsupportedKind` for a reserved tag
    /// - `MalformedFrame` if the payload is short, a length prefix is
    ///   inconsistent, text is not UTF-8, or bytes follow the frame
    /// - `NonCanonicalEncoding` for redundant big integer bytes under the
    ///   strict policy
    /// - `LimitExceeded` if a length prefix is over the configured limit
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        let (value, consumed) = self.decode_prefix(bytes)?;
        if consumed < bytes.len() {
            let err = Error::malformed(FrameDefect::TrailingBytes(bytes.len() - consumed));
            return Err(reject(err, 0, Some(value.tag())));
        }
        Ok(value)
    }

    /// Decodes the frame at the start of `bytes`, returning the value and
    /// the number of bytes it occupied.
    ///
    /// # Errors
    ///
    /// Same as [`Decoder::decode`], except that trailing bytes are allowed.
    pub fn decode_prefix(&self, bytes: &[u8]) -> Result<(Value, usize)> {
        if bytes.is_empty() {
            return Err(reject(Error::malformed(FrameDefect::Empty), 0, None));
        }
        let mut reader = ByteReader::new(bytes);
        let value = self.frame(&mut reader)?;
        Ok((value, reader.position()))
    }

    /// Decodes a payload whose tag was stored separately.
    ///
    /// Reads exactly the bytes of one payload from `reader`.
    ///
    /// # Errors
    ///
    /// Same as [`Decoder::decode`], without context attached.
    pub fn decode_payload(&self, tag: TypeTag, reader: &mut ByteReader<'_>) -> Result<Value> {
        match tag {
            TypeTag::Null => Ok(Value::Null),
            TypeTag::Bool => self.bool(reader).map(Value::Bool),
            TypeTag::Byte => Ok(Value::Byte(i8::from_be_bytes(reader.read_array()?))),
            TypeTag::Int => reader.read_i32().map(Value::Int),
            TypeTag::Long => reader.read_i64().map(Value::Long),
            TypeTag::Double => {
                let bits = u64::from_be_bytes(reader.read_array()?);
                Ok(Value::Double(f64::from_bits(bits)))
            }
            TypeTag::String => {
                let bytes = reader.read_len_prefixed(self.config.max_payload_len)?;
                let text = std::str::from_utf8(bytes)
                    .map_err(|_| Error::malformed(FrameDefect::InvalidUtf8))?;
                Ok(Value::String(Arc::from(text)))
            }
            TypeTag::BigInteger => self.big_integer(tag, reader).map(Value::BigInteger),
            TypeTag::BigDecimal => {
                let scale = reader.read_i32()?;
                let unscaled = self.big_integer(tag, reader)?;
                Ok(Value::BigDecimal(Decimal::new(unscaled, scale)))
            }
            TypeTag::Short | TypeTag::Float | TypeTag::Char => Err(Error::unsupported_kind(tag)),
        }
    }

    /// Iterates over back-to-back frames in `bytes`.
    ///
    /// The iterator yields at most one error and then stops, since the
    /// position of the next frame is unknown after a defect.
    #[must_use]
    pub fn frames<'a>(&'a self, bytes: &'a [u8]) -> Frames<'a> {
        Frames {
            decoder: self,
            reader: ByteReader::new(bytes),
            failed: false,
        }
    }

    /// Reads one frame from a stream.
    ///
    /// Returns `Ok(None)` if the stream ends before the tag byte. Payload
    /// buffers grow as bytes arrive, so a forged length prefix cannot force
    /// a large allocation up front.
    ///
    /// # Errors
    ///
    /// Same as [`Decoder::decode`]; a stream ending inside a frame is
    /// `MalformedFrame(Truncated)` and read failures are `IoError`.
    pub fn read_frame<R: Read>(&self, mut reader: R) -> Result<Option<Value>> {
        let mut frame = Vec::new();
        if (&mut reader).take(1).read_to_end(&mut frame)? == 0 {
            return Ok(None);
        }

        let tag = match TypeTag::from_code(frame[0]) {
            Some(tag) if !tag.is_reserved() => tag,
            // Unknown and reserved tags fail on the tag byte alone.
            _ => return self.decode(&frame).map(Some),
        };

        self.read_payload(tag, &mut reader, &mut frame)
            .map_err(|err| reject(err, 0, Some(tag)))?;
        self.decode(&frame).map(Some)
    }

    fn read_payload<R: Read>(
        &self,
        tag: TypeTag,
        reader: &mut R,
        frame: &mut Vec<u8>,
    ) -> Result<()> {
        if let Some(len) = tag.fixed_payload_len() {
            return read_exactly(reader, len, frame);
        }
        if tag == TypeTag::BigDecimal {
            read_exactly(reader, INT_SIZE, frame)?;
        }
        read_exactly(reader, INT_SIZE, frame)?;
        let prefix: [u8; INT_SIZE] = frame[frame.len() - INT_SIZE..]
            .try_into()
            .map_err(|_| Error::truncated(INT_SIZE, 0))?;
        let raw = i32::from_be_bytes(prefix);
        let declared =
            usize::try_from(raw).map_err(|_| Error::malformed(FrameDefect::NegativeLength(raw)))?;
        let limit = self.config.max_payload_len;
        if declared > limit {
            return Err(Error::new(ErrorKind::LimitExceeded { declared, limit }));
        }
        read_exactly(reader, declared, frame)
    }

    fn frame(&self, reader: &mut ByteReader<'_>) -> Result<Value> {
        let offset = reader.position();
        let code = reader.read_u8().map_err(|err| reject(err, offset, None))?;
        let tag = TypeTag::try_from(code).map_err(|err| reject(err, offset, None))?;
        self.decode_payload(tag, reader)
            .map_err(|err| reject(err, offset, Some(tag)))
    }

    fn bool(&self, reader: &mut ByteReader<'_>) -> Result<bool> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => match self.config.canonical {
                CanonicalPolicy::Reject => Err(Error::malformed(FrameDefect::InvalidBool(byte))),
                CanonicalPolicy::Normalize => {
                    tracing::trace!(byte, "normalized bool byte");
                    Ok(true)
                }
            },
        }
    }

    fn big_integer(&self, tag: TypeTag, reader: &mut ByteReader<'_>) -> Result<BigInt> {
        let bytes = reader.read_len_prefixed(self.config.max_payload_len)?;
        if !is_minimal_twos_complement(bytes) {
            match self.config.canonical {
                CanonicalPolicy::Reject => return Err(Error::non_canonical(tag)),
                CanonicalPolicy::Normalize => {
                    tracing::trace!(%tag, len = bytes.len(), "normalized big integer bytes");
                }
            }
        }
        Ok(BigInt::from_signed_bytes_be(bytes))
    }
}

/// Iterator over back-to-back frames; see [`Decoder::frames`].
#[derive(Debug)]
pub struct Frames<'a> {
    decoder: &'a Decoder,
    reader: ByteReader<'a>,
    failed: bool,
}

impl Frames<'_> {
    /// Returns the offset of the next frame.
    #[must_use]
    pub fn position(&self) -> usize {
        self.reader.position()
    }
}

impl Iterator for Frames<'_> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let result = self.decoder.frame(&mut self.reader);
        self.failed = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Frames<'_> {}

/// Returns true if `bytes` is the shortest two's-complement form of its value.
///
/// Zero is the single byte `0x00`; the empty sequence is not canonical.
#[must_use]
pub fn is_minimal_twos_complement(bytes: &[u8]) -> bool {
    match bytes {
        [] => false,
        [0x00, next, ..] => next & 0x80 != 0,
        [0xFF, next, ..] => next & 0x80 == 0,
        _ => true,
    }
}

fn read_exactly<R: Read>(reader: &mut R, len: usize, frame: &mut Vec<u8>) -> Result<()> {
    let want = u64::try_from(len).map_err(|_| Error::new(ErrorKind::PayloadTooLarge(len)))?;
    let got = reader.take(want).read_to_end(frame)?;
    if got < len {
        return Err(Error::truncated(len, got));
    }
    Ok(())
}

fn reject(err: Error, offset: usize, tag: Option<TypeTag>) -> Error {
    if err.context.is_some() {
        return err;
    }
    let mut context = ErrorContext::new().with_offset(offset);
    if let Some(tag) = tag {
        context = context.with_tag(tag);
    }
    tracing::debug!(offset, tag = ?tag, error = %err, "rejected frame");
    err.with_context(context)
}
