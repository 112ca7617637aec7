// libntag/src/lib.rs

//! libntag
//!
//! Host-side command engine for NTAG213/215/216 tags: frame encoding,
//! CRC_A, reply classification and the tag session state machine, on top
//! of any bit-level radio front end.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
