//! Utilities for libntag: small helpers used across the crate for
//! debug output.

pub mod hex;

// Re-export the helpers at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex(...)`.
pub use hex::*;
