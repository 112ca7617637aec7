// Shared helpers for the integration test crates. Each per-topic file pulls
// this in through `#[path]`, so not every helper is used everywhere.
#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use libntag::test_support::{
    connected_device, sample_uid, seed_auto_connect, seed_connect, seed_connect_software, with_crc,
};

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
