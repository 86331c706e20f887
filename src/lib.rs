//! Cellcodec - typed-value binary codec
//!
//! This crate re-exports all layers of the codec for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: cellcodec_wire        — Frame encoder/decoder, frame iteration, stream reads
//! Layer 0: cellcodec_foundation  — Core types (TypeTag, Value, Decimal, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use cellcodec::{Value, decode, encode};
//!
//! let frame = encode(&Value::Long(-1)).unwrap();
//! assert_eq!(decode(&frame).unwrap(), Value::Long(-1));
//! ```

pub use cellcodec_foundation as foundation;
pub use cellcodec_wire as wire;

pub use cellcodec_foundation::{BigInt, Decimal, Error, ErrorKind, Result, TypeTag, Value};
pub use cellcodec_wire::{DecodeConfig, Decoder, decode, encode};
