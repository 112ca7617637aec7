// libntag/src/transport/mock.rs

use std::collections::VecDeque;

use crate::protocol::{AckCode, CrcMismatch};
use crate::transport::traits::{CrcLink, Transport};

/// One recorded transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub data: Vec<u8>,
    pub bits: usize,
    /// Sent through the CRC protected path.
    pub crc: bool,
}

/// One recorded receive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiveRequest {
    pub bits: usize,
    pub crc: bool,
}

/// A queued reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Bits { data: Vec<u8>, bits: usize },
    /// Hardware CRC check failed.
    CrcError,
}

/// Mock transport for unit tests. It records transmissions and receive
/// requests and replays queued replies in order. It implements
/// [`CrcLink`] itself, standing in for a front end with hardware CRC;
/// wrap it in `SoftwareCrc` to exercise the software path instead. An
/// empty queue answers with silence.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub transmitted: Vec<Transmission>,
    pub receives: Vec<ReceiveRequest>,
    pub responses: VecDeque<MockReply>,
    /// Returned by `detect_collision`.
    pub collision: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bits(&mut self, data: Vec<u8>, bits: usize) {
        self.responses.push_back(MockReply::Bits { data, bits });
    }

    /// Whole-byte reply.
    pub fn push_bytes(&mut self, data: Vec<u8>) {
        let bits = data.len() * 8;
        self.push_bits(data, bits);
    }

    /// 4-bit reply.
    pub fn push_nibble(&mut self, nibble: u8) {
        self.push_bits(vec![nibble & 0x0F], 4);
    }

    pub fn push_ack(&mut self, code: AckCode) {
        self.push_nibble(code.nibble());
    }

    /// Zero-bit reply (timeout).
    pub fn push_silence(&mut self) {
        self.push_bits(Vec::new(), 0);
    }

    pub fn push_crc_error(&mut self) {
        self.responses.push_back(MockReply::CrcError);
    }

    pub fn set_collision(&mut self, collision: bool) {
        self.collision = collision;
    }

    /// Total number of transport calls made so far.
    pub fn calls(&self) -> usize {
        self.transmitted.len() + self.receives.len()
    }

    /// Data of every transmission, in order.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.transmitted.iter().map(|t| t.data.clone()).collect()
    }

    /// Pop the next reply, cut to the `limit` bits the caller asked for
    /// like a real front end would.
    fn next_reply(
        &mut self,
        buf: &mut [u8],
        limit: usize,
    ) -> std::result::Result<usize, CrcMismatch> {
        match self.responses.pop_front() {
            None => Ok(0),
            Some(MockReply::CrcError) => Err(CrcMismatch),
            Some(MockReply::Bits { data, bits }) => {
                let bits = bits.min(limit);
                let n = bits.div_ceil(8).min(data.len()).min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                Ok(bits)
            }
        }
    }
}

impl Transport for MockTransport {
    fn transmit_bits(&mut self, data: &[u8], bits: usize) -> usize {
        self.transmitted.push(Transmission {
            data: data[..bits.div_ceil(8)].to_vec(),
            bits,
            crc: false,
        });
        bits
    }

    fn receive_bits(&mut self, buf: &mut [u8], bits: usize) -> usize {
        self.receives.push(ReceiveRequest { bits, crc: false });
        // A CRC failure means nothing on the raw path; report silence.
        self.next_reply(buf, bits).unwrap_or(0)
    }

    fn detect_collision(&mut self) -> bool {
        self.collision
    }
}

impl CrcLink for MockTransport {
    fn transmit_bits_with_crc(&mut self, data: &[u8], bits: usize) -> usize {
        self.transmitted.push(Transmission {
            data: data[..bits.div_ceil(8)].to_vec(),
            bits,
            crc: true,
        });
        bits
    }

    fn receive_bits_with_crc(
        &mut self,
        buf: &mut [u8],
        bits: usize,
    ) -> std::result::Result<usize, CrcMismatch> {
        self.receives.push(ReceiveRequest { bits, crc: true });
        self.next_reply(buf, bits)
    }
}
