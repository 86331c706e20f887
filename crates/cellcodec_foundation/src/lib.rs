//! Core types for the cell codec.
//!
//! This crate provides:
//! - [`TypeTag`] - The stable enumeration of wire type codes
//! - [`Value`] - The scalar values a cell can hold
//! - [`Decimal`] - Arbitrary-precision decimals with an explicit scale
//! - [`Error`] - Error types with frame context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decimal;
pub mod error;
pub mod tag;
pub mod value;

pub use decimal::Decimal;
pub use error::{Error, ErrorContext, ErrorKind, FrameDefect, Result};
pub use num_bigint::BigInt;
pub use tag::TypeTag;
pub use value::Value;
