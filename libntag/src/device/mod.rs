// libntag/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod operations;
pub mod state;

pub use builder::DeviceBuilder;
pub use handle::Device;
pub use state::SessionState;
