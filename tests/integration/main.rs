//! Workspace integration tests
//!
//! Randomized round-trips across every tag and concurrent use of the codec.
