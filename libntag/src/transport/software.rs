// libntag/src/transport/software.rs

use crate::constants::CRC_LEN;
use crate::protocol::crc::{Crc16, CrcA, CrcMismatch, append_crc, verify_crc};
use crate::transport::traits::{CrcLink, Transport};

/// Software CRC composed around a raw transport.
///
/// On transmit the CRC (LSB first) is appended after the payload; on
/// receive two extra bytes are clocked in, checked against the CRC of
/// everything before them and stripped. Scratch buffers live on the call
/// stack, so independent sessions never share state.
#[derive(Debug, Clone)]
pub struct SoftwareCrc<T, C = CrcA> {
    inner: T,
    crc: C,
}

impl<T: Transport> SoftwareCrc<T, CrcA> {
    /// Wrap a raw transport with the standard CRC_A.
    pub fn crc_a(inner: T) -> Self {
        Self::new(inner, CrcA)
    }
}

impl<T: Transport, C: Crc16> SoftwareCrc<T, C> {
    pub fn new(inner: T, crc: C) -> Self {
        Self { inner, crc }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport, C> Transport for SoftwareCrc<T, C> {
    fn transmit_bits(&mut self, data: &[u8], bits: usize) -> usize {
        self.inner.transmit_bits(data, bits)
    }

    fn receive_bits(&mut self, buf: &mut [u8], bits: usize) -> usize {
        self.inner.receive_bits(buf, bits)
    }

    fn detect_collision(&mut self) -> bool {
        self.inner.detect_collision()
    }
}

impl<T: Transport, C: Crc16> CrcLink for SoftwareCrc<T, C> {
    /// # Panics
    ///
    /// Panics if `bits` is not a multiple of 8.
    fn transmit_bits_with_crc(&mut self, data: &[u8], bits: usize) -> usize {
        assert!(bits % 8 == 0, "crc requested on a {bits}-bit frame");
        let framed = append_crc(&self.crc, &data[..bits / 8]);
        self.inner.transmit_bits(&framed, framed.len() * 8)
    }

    /// # Panics
    ///
    /// Panics if `bits` is not a multiple of 8 or `buf` cannot hold them.
    fn receive_bits_with_crc(
        &mut self,
        buf: &mut [u8],
        bits: usize,
    ) -> std::result::Result<usize, CrcMismatch> {
        assert!(bits % 8 == 0, "crc requested on a {bits}-bit receive");
        assert!(buf.len() >= bits / 8, "receive buffer shorter than {bits} bits");

        let mut scratch = vec![0u8; bits / 8 + CRC_LEN];
        let scratch_bits = scratch.len() * 8;
        let received = self
            .inner
            .receive_bits(&mut scratch, scratch_bits)
            .min(scratch_bits);

        // Silence and 4-bit ACK/NAK replies carry no CRC.
        if received == 0 || received % 8 != 0 {
            let n = received.div_ceil(8).min(buf.len());
            buf[..n].copy_from_slice(&scratch[..n]);
            return Ok(received);
        }

        let payload = verify_crc(&self.crc, &scratch[..received / 8]).map_err(|e| {
            log::warn!("crc mismatch on {received}-bit reply");
            e
        })?;
        buf[..payload.len()].copy_from_slice(payload);
        Ok(payload.len() * 8)
    }
}
