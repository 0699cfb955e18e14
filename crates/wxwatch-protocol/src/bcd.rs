//! Binary-coded-decimal decoding.

/// Decode a packed BCD byte into an integer.
///
/// The low nibble carries the units digit and the high nibble the tens digit,
/// so well-formed input decodes to 0..=99. Nibbles above 9 are not rejected;
/// they silently produce values of 10 and up, matching the console hardware's
/// assumption that it never emits invalid BCD.
pub fn decode_bcd(byte: u8) -> u8 {
    (byte & 0x0F) + (byte >> 4) * 10
}
