//! Frame synchronization and dispatch over a byte stream.
//!
//! The reader owns the stream cursor; reads are blocking and
//! exact-count-or-failed. One call to [`FrameReader::next_reading`] performs
//! one full cycle: scan for the `0xFF 0xFF` frame-start marker, read the
//! device-code byte, read that device's fixed-length frame, and decode it.

use std::io::Read;

use log::debug;

use crate::constants::FRAME_MARKER;
use crate::decode::decode_frame;
use crate::device::DeviceCode;
use crate::error::ProtocolError;
use crate::measurement::Measurement;

/// Reads console frames from any blocking byte stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    stream: R,
}

impl<R: Read> FrameReader<R> {
    /// Create a reader over a byte stream.
    pub fn new(stream: R) -> Self {
        FrameReader { stream }
    }

    /// Consume the reader and return the underlying stream.
    pub fn into_inner(self) -> R {
        self.stream
    }

    /// Read and decode the next frame.
    ///
    /// Returns `Ok(None)` when the frame belongs to one of the reserved
    /// device codes the console never puts decodable payload behind. A
    /// checksum mismatch is returned as a recoverable error; the bad frame's
    /// bytes have been consumed and the next call resynchronizes cleanly.
    pub fn next_reading(&mut self) -> Result<Option<Measurement>, ProtocolError> {
        self.synchronize()?;

        let code = self.read_byte()?;
        let device = DeviceCode::from_byte(code)?;

        let Some(len) = device.frame_len() else {
            debug!("skipping undecoded {} frame (code {})", device, code);
            return Ok(None);
        };

        let frame = self.read_frame(len)?;
        decode_frame(device, &frame)
    }

    /// Scan the stream for the two-byte frame-start marker, leaving the
    /// cursor at the device-code byte.
    ///
    /// A lone marker byte whose successor is not another marker is discarded
    /// together with that successor and the scan restarts from scratch; the
    /// failed second byte is never reused as a candidate first marker.
    pub fn synchronize(&mut self) -> Result<(), ProtocolError> {
        loop {
            let mut discarded = 0usize;
            while self.read_byte()? != FRAME_MARKER {
                discarded += 1;
            }
            if discarded > 0 {
                debug!("discarded {} bytes before frame marker", discarded);
            }
            if self.read_byte()? == FRAME_MARKER {
                return Ok(());
            }
            debug!("lone frame marker, restarting scan");
        }
    }

    fn read_byte(&mut self) -> Result<u8, ProtocolError> {
        let mut buf = [0u8; 1];
        self.stream.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_frame(&mut self, len: usize) -> Result<Vec<u8>, ProtocolError> {
        let mut frame = vec![0u8; len];
        self.stream.read_exact(&mut frame)?;
        Ok(frame)
    }
}
