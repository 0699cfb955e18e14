//! Weather Station Console Protocol
//!
//! This crate decodes the binary telemetry protocol emitted by a multi-sensor
//! home weather station console over a serial link. The console transmits
//! fixed-format frames, one per sensor reading, on a single 9600 8N1 line.
//!
//! # Protocol Overview
//!
//! Every frame is preceded by a two-byte `0xFF 0xFF` start marker, followed by
//! a device-code byte selecting the sensor, followed by the device's
//! fixed-length frame whose last byte is an 8-bit additive checksum:
//!
//! ```text
//! +------+------+-------------+----------------------+----------+
//! | 0xFF | 0xFF | device code | payload (BCD + bits) | checksum |
//! +------+------+-------------+----------------------+----------+
//! ```
//!
//! | Device code | Sensor                    | Frame bytes (incl. checksum) |
//! |-------------|---------------------------|------------------------------|
//! | 0           | anemometer                | 8                            |
//! | 1           | rain gauge                | 13                           |
//! | 3           | outdoor thermo-hygrometer | 6                            |
//! | 6           | indoor temp/baro gauge    | 11                           |
//! | 14          | minute tick               | 2                            |
//!
//! Codes 2, 4, 5 and 15 are reserved by the protocol but carry no decoded
//! payload; they are acknowledged and skipped. Numeric fields are packed BCD,
//! status and alarm flags are single bits of the first frame byte.
//!
//! # Example
//!
//! ```rust,ignore
//! use wxwatch_protocol::FrameReader;
//!
//! let mut reader = FrameReader::new(port);
//! loop {
//!     match reader.next_reading() {
//!         Ok(Some(measurement)) => println!("{measurement}"),
//!         Ok(None) => {} // reserved device code, nothing decoded
//!         Err(err) if err.is_recoverable() => eprintln!("{err}"),
//!         Err(err) => return Err(err),
//!     }
//! }
//! ```

mod bcd;
mod checksum;
mod constants;
mod decode;
mod device;
mod error;
mod measurement;
mod reader;

pub use bcd::*;
pub use checksum::*;
pub use constants::*;
pub use decode::*;
pub use device::*;
pub use error::*;
pub use measurement::*;
pub use reader::*;
