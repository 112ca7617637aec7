// libntag/src/protocol/mod.rs

pub mod ack;
pub mod commands;
pub mod crc;
pub mod frame;
pub mod parser;
pub mod responses;

pub use ack::AckCode;
pub use commands::{Command, Expect};
pub use crc::{Crc16, CrcA, CrcMismatch};
pub use frame::Frame;
pub use responses::*;
