//! Protocol error types.

use std::io;

use thiserror::Error;

use crate::device::DeviceCode;

/// Errors that can occur while reading and decoding console frames.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The byte stream ended in the middle of a read. Fatal.
    #[error("stream closed mid-frame")]
    StreamClosed,

    /// Transport-level I/O failure. Fatal.
    #[error("stream error: {0}")]
    Stream(io::Error),

    /// No decoder is registered for this device code. Fatal.
    #[error("unknown device code: 0x{0:02X}")]
    UnknownDeviceCode(u8),

    /// Frame checksum did not match. The frame is discarded and the caller
    /// may resynchronize and keep reading.
    #[error("checksum mismatch on {device} frame: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch {
        /// Device the frame belonged to.
        device: DeviceCode,
        /// Checksum computed over the device code and payload.
        expected: u8,
        /// Trailing checksum byte actually received.
        actual: u8,
    },

    /// Frame length does not match the device's fixed frame size.
    #[error("bad frame length for {device}: expected {expected} bytes, got {actual}")]
    BadFrameLength {
        /// Device the frame belonged to.
        device: DeviceCode,
        /// The device's fixed frame length.
        expected: usize,
        /// Length of the slice handed to the decoder.
        actual: usize,
    },
}

impl ProtocolError {
    /// Whether the caller can discard the current frame and keep reading.
    ///
    /// Only checksum mismatches are recoverable; stream failures and unknown
    /// device codes leave the reader with no way to find the next frame
    /// boundary reliably short of a fresh synchronization, which is exactly
    /// what recovery from a checksum mismatch does anyway.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ProtocolError::ChecksumMismatch { .. })
    }
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ProtocolError::StreamClosed
        } else {
            ProtocolError::Stream(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_maps_to_stream_closed() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "early eof");
        assert!(matches!(
            ProtocolError::from(eof),
            ProtocolError::StreamClosed
        ));

        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(ProtocolError::from(broken), ProtocolError::Stream(_)));
    }

    #[test]
    fn test_only_checksum_mismatch_is_recoverable() {
        let mismatch = ProtocolError::ChecksumMismatch {
            device: DeviceCode::Wind,
            expected: 0x12,
            actual: 0x34,
        };
        assert!(mismatch.is_recoverable());
        assert!(!ProtocolError::StreamClosed.is_recoverable());
        assert!(!ProtocolError::UnknownDeviceCode(9).is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ProtocolError::ChecksumMismatch {
            device: DeviceCode::Rain,
            expected: 0xAB,
            actual: 0xCD,
        };
        let text = err.to_string();
        assert!(text.contains("0xAB"));
        assert!(text.contains("0xCD"));
        assert!(text.contains("rain gauge"));
    }
}
