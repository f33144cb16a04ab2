//! Carrier module: the board value type and its invariants.
//!
//! This is the foundational layer. No other kernel module is imported here
//! except the shared error type.

pub mod grid;
pub mod parity;
