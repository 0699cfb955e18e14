//! Frame checksum computation and validation.
//!
//! Each frame ends with an 8-bit additive checksum covering the device code
//! and every payload byte before the checksum itself. The sum wraps at 8 bits;
//! it is deliberately masked, never saturated or widened.

/// Compute the checksum for a device code and payload.
pub fn frame_checksum(code: u8, payload: &[u8]) -> u8 {
    payload
        .iter()
        .fold(code, |sum, &byte| sum.wrapping_add(byte))
}

/// Validate a complete frame (payload plus trailing checksum byte) against
/// its device code. Empty frames never validate.
pub fn validate(code: u8, frame: &[u8]) -> bool {
    match frame.split_last() {
        Some((&checksum, payload)) => frame_checksum(code, payload) == checksum,
        None => false,
    }
}
