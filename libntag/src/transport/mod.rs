// libntag/src/transport/mod.rs

pub mod mock;
pub mod software;
pub mod traits;

pub use mock::MockTransport;
pub use software::SoftwareCrc;
pub use traits::{CrcLink, Link, Transport};
