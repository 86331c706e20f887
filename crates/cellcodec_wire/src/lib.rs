//! Binary frame codec for cell values.
//!
//! This crate provides:
//! - [`encode`] / [`decode`] - One value to one frame and back
//! - [`Decoder`] - Configurable decoding, frame iteration, and stream reads
//! - [`DecodeConfig`] - Length limits and canonical-form policy
//! - [`primitive`] - Big-endian field helpers shared with storage layers
//!
//! Encoding and decoding are pure functions of their input and may be
//! called from any number of threads without synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod decode;
pub mod encode;
pub mod primitive;

pub use config::{CanonicalPolicy, DecodeConfig};
pub use decode::{Decoder, Frames, decode, is_minimal_twos_complement};
pub use encode::{encode, encode_into, encoded_len, write_frame};
pub use primitive::ByteReader;
