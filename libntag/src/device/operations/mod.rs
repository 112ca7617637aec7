pub mod auth;
pub mod config;
pub mod connect;
pub mod read;
pub mod write;

// Re-export the operations at the root so `Device` can delegate to
// `operations::read(...)` and friends.
pub use auth::pwd_auth;
pub use config::{read_settings, write_settings};
pub use connect::{
    anticollision, auto_connect, connect, detect, disconnect, halt, request, select_level, wakeup,
};
pub use read::{fast_read, get_version, read, read_counter, read_signature, read_uid};
pub use write::{comp_write, write, write_pages};
