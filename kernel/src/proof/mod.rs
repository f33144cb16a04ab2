//! Proof module: canonical content hashing for report digests.
//!
//! Depends on nothing internal.

pub mod hash;
