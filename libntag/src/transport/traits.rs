// libntag/src/transport/traits.rs

use crate::protocol::CrcMismatch;

/// Raw bit-level access to the radio front end.
///
/// Both calls are blocking and bounded by the front end's own timeout.
/// A receive that produced nothing returns 0; the protocol layer treats
/// that as a timeout.
pub trait Transport {
    /// Transmit the first `bits` bits of `data` without any CRC.
    /// Returns the number of bits sent.
    fn transmit_bits(&mut self, data: &[u8], bits: usize) -> usize;

    /// Receive up to `bits` bits into `buf` (at least `bits.div_ceil(8)`
    /// bytes long). Returns the number of valid bits; sub-byte replies
    /// occupy the low bits of `buf[0]`.
    fn receive_bits(&mut self, buf: &mut [u8], bits: usize) -> usize;

    /// Whether the last anticollision answer contained a bit collision.
    /// Front ends without a collision probe report none.
    fn detect_collision(&mut self) -> bool {
        false
    }
}

/// CRC protected transmit and receive.
///
/// Front ends that compute CRC_A in hardware implement this directly;
/// everything else is wrapped in [`SoftwareCrc`](super::SoftwareCrc).
pub trait CrcLink {
    /// Transmit `bits` bits of `data` followed by their CRC.
    fn transmit_bits_with_crc(&mut self, data: &[u8], bits: usize) -> usize;

    /// Receive a CRC protected payload of up to `bits` bits (CRC not
    /// included). The CRC is checked and stripped; the returned count
    /// covers the payload only. Short 4-bit replies and silence carry no
    /// CRC and are returned unchecked.
    fn receive_bits_with_crc(
        &mut self,
        buf: &mut [u8],
        bits: usize,
    ) -> std::result::Result<usize, CrcMismatch>;
}

/// Everything a session needs from its transport.
pub trait Link: Transport + CrcLink {}

impl<T: Transport + CrcLink + ?Sized> Link for T {}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transmit_bits(&mut self, data: &[u8], bits: usize) -> usize {
        (**self).transmit_bits(data, bits)
    }

    fn receive_bits(&mut self, buf: &mut [u8], bits: usize) -> usize {
        (**self).receive_bits(buf, bits)
    }

    fn detect_collision(&mut self) -> bool {
        (**self).detect_collision()
    }
}

impl<T: CrcLink + ?Sized> CrcLink for &mut T {
    fn transmit_bits_with_crc(&mut self, data: &[u8], bits: usize) -> usize {
        (**self).transmit_bits_with_crc(data, bits)
    }

    fn receive_bits_with_crc(
        &mut self,
        buf: &mut [u8],
        bits: usize,
    ) -> std::result::Result<usize, CrcMismatch> {
        (**self).receive_bits_with_crc(buf, bits)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit_bits(&mut self, data: &[u8], bits: usize) -> usize {
        (**self).transmit_bits(data, bits)
    }

    fn receive_bits(&mut self, buf: &mut [u8], bits: usize) -> usize {
        (**self).receive_bits(buf, bits)
    }

    fn detect_collision(&mut self) -> bool {
        (**self).detect_collision()
    }
}

impl<T: CrcLink + ?Sized> CrcLink for Box<T> {
    fn transmit_bits_with_crc(&mut self, data: &[u8], bits: usize) -> usize {
        (**self).transmit_bits_with_crc(data, bits)
    }

    fn receive_bits_with_crc(
        &mut self,
        buf: &mut [u8],
        bits: usize,
    ) -> std::result::Result<usize, CrcMismatch> {
        (**self).receive_bits_with_crc(buf, bits)
    }
}
