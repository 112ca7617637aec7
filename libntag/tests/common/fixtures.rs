// fixtures.rs: commonly used air frames and payloads

/// Decode a spaced hex string such as `"30 04 26 ee"`.
pub fn frame(s: &str) -> Vec<u8> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact).expect("fixture hex")
}

/// GET_VERSION answer of an NTAG216.
pub fn ntag216_version() -> Vec<u8> {
    frame("00 04 04 02 01 00 13 03")
}

/// GET_VERSION answer of an NTAG213.
pub fn ntag213_version() -> Vec<u8> {
    frame("00 04 04 02 01 00 0f 03")
}

/// READ(0) answer for `libntag::test_support::sample_uid()`:
/// UID0..2 BCC0, UID3..6, BCC1 + static lock bytes, capability container.
pub fn sample_page0() -> Vec<u8> {
    frame("04 6f 11 f2 92 3a 5c 80 74 48 00 00 e1 10 12 00")
}

/// Sixteen recognisable user-memory bytes.
pub fn user_pages() -> Vec<u8> {
    frame("03 0c d1 01 08 55 04 6e 78 70 2e 63 6f 6d fe 00")
}
