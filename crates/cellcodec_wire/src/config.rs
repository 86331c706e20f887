//! Decoder configuration.

/// How the decoder treats frames that are valid but not canonical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CanonicalPolicy {
    /// Fail with `NonCanonicalEncoding`.
    #[default]
    Reject,
    /// Accept and normalize: redundant sign bytes are dropped and any
    /// nonzero bool byte reads as `true`.
    Normalize,
}

/// Configuration for the decoder.
///
/// Controls how strictly frames are validated and how large a length
/// prefix may be before the decoder refuses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Largest accepted length prefix, in bytes.
    pub max_payload_len: usize,

    /// Treatment of non-canonical big integers and bools.
    pub canonical: CanonicalPolicy,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_payload_len: i32::MAX as usize,
            canonical: CanonicalPolicy::Reject,
        }
    }
}

impl DecodeConfig {
    /// Strict validation with no extra length limit. Same as `default()`.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Accepts non-canonical frames and normalizes them.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            canonical: CanonicalPolicy::Normalize,
            ..Self::default()
        }
    }

    /// Strict validation with length prefixes capped at `limit` bytes.
    #[must_use]
    pub fn bounded(limit: usize) -> Self {
        Self {
            max_payload_len: limit,
            ..Self::default()
        }
    }

    /// Builder method to set the maximum payload length.
    #[must_use]
    pub fn with_max_payload_len(mut self, limit: usize) -> Self {
        self.max_payload_len = limit;
        self
    }

    /// Builder method to set the canonical policy.
    #[must_use]
    pub fn with_canonical(mut self, policy: CanonicalPolicy) -> Self {
        self.canonical = policy;
        self
    }

    /// Returns true if non-canonical frames are rejected.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.canonical == CanonicalPolicy::Reject
    }
}
