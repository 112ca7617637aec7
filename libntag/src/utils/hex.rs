//! Hex formatting for log output.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{b:02x}");
        s
    })
}

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Render the first `bits` bits of an air frame. Frames that end on a
/// byte boundary print as plain spaced hex; short frames carry their bit
/// count, e.g. `"26 /7"` for REQUEST.
pub fn format_frame(data: &[u8], bits: usize) -> String {
    let len = bits.div_ceil(8).min(data.len());
    let mut s = bytes_to_hex_spaced(&data[..len]);
    if bits % 8 != 0 {
        let _ = write!(s, " /{bits}");
    }
    s
}
