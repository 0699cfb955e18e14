//! Per-device frame decoders.
//!
//! Every decoder is a pure function over a complete frame slice. The
//! dispatcher in [`decode_frame`] validates the checksum first; a measurement
//! is only ever assembled from a frame that validated against its device
//! code. Field extraction mirrors the console's bit layouts exactly,
//! combining BCD nibble pairs with device-specific scale factors.

use crate::bcd::decode_bcd;
use crate::checksum::{frame_checksum, validate};
use crate::constants::*;
use crate::device::DeviceCode;
use crate::error::ProtocolError;
use crate::measurement::{
    IndoorReading, Measurement, MinuteReading, OutdoorThermoHygroReading, RainReading,
    RainTotalStart, WindReading,
};

/// Decode one complete frame for the given device.
///
/// Returns `Ok(None)` for the reserved device codes that carry no decodable
/// payload (2, 4, 5, 15). For all other devices the frame length must match
/// [`DeviceCode::frame_len`] and the trailing checksum must validate;
/// otherwise no measurement is produced.
pub fn decode_frame(
    device: DeviceCode,
    frame: &[u8],
) -> Result<Option<Measurement>, ProtocolError> {
    let Some(expected_len) = device.frame_len() else {
        return Ok(None);
    };

    if frame.len() != expected_len {
        return Err(ProtocolError::BadFrameLength {
            device,
            expected: expected_len,
            actual: frame.len(),
        });
    }

    if !validate(device.code(), frame) {
        return Err(ProtocolError::ChecksumMismatch {
            device,
            expected: frame_checksum(device.code(), &frame[..frame.len() - 1]),
            actual: frame[frame.len() - 1],
        });
    }

    let measurement = match device {
        DeviceCode::Wind => Measurement::Wind(decode_wind(frame)),
        DeviceCode::Rain => Measurement::Rain(decode_rain(frame)),
        DeviceCode::OutdoorThermoHygro => {
            Measurement::OutdoorThermoHygro(decode_outdoor_thermo_hygro(frame))
        }
        DeviceCode::IndoorTempBaro => Measurement::Indoor(decode_indoor(frame)),
        DeviceCode::Minute => Measurement::Minute(decode_minute(frame)),
        // frame_len() returned Some, so none of the reserved codes get here
        DeviceCode::ThermoHygro
        | DeviceCode::Thermo
        | DeviceCode::ThermoHygroBaro
        | DeviceCode::Clock => return Ok(None),
    };

    Ok(Some(measurement))
}

/// Wind frame layout (8 bytes):
///
/// ```text
/// byte 0: flags (bit 6 battery, bit 5 avg over, bit 4 gust over)
/// byte 1: direction units/tens (BCD)
/// byte 2: low nibble direction hundreds, high nibble gust 1/100ths
/// byte 3: gust speed units/tens (BCD)
/// byte 4: average speed 1/10ths (BCD)
/// byte 5: low nibble average tens, bits 5-7 wind-chill status
/// byte 6: wind chill (BCD)
/// byte 7: checksum
/// ```
fn decode_wind(frame: &[u8]) -> WindReading {
    let direction_degrees =
        decode_bcd(frame[1]) as u16 + decode_bcd(frame[2] & 0x0F) as u16 * 100;

    let gust_speed =
        decode_bcd(frame[2] & 0xF0) as f32 / 100.0 + decode_bcd(frame[3]) as f32;

    let average_speed =
        decode_bcd(frame[4]) as f32 / 10.0 + decode_bcd(frame[5] & 0x0F) as f32 * 10.0;

    let chill_sign = frame[5] & WIND_CHILL_SIGN_BIT != 0;
    let mut wind_chill = decode_bcd(frame[6]) as f32;
    if chill_sign {
        wind_chill = -wind_chill;
    }

    WindReading {
        battery_low: frame[0] & BATTERY_LOW_BIT != 0,
        average_over: frame[0] & WIND_AVERAGE_OVER_BIT != 0,
        gust_over: frame[0] & WIND_GUST_OVER_BIT != 0,
        direction_degrees,
        gust_speed,
        average_speed,
        chill_no_data: frame[5] & WIND_CHILL_NO_DATA_BIT != 0,
        chill_over: frame[5] & WIND_CHILL_OVER_BIT != 0,
        wind_chill,
    }
}

/// Rain frame layout (13 bytes):
///
/// ```text
/// byte 0:     flags (bit 6 battery, bit 4 rate over, bit 5 total over,
///             bit 7 yesterday over)
/// bytes 1-2:  current rate (BCD, hundreds in byte 2 low nibble)
/// bytes 2-4:  running total (1/100ths in byte 2 high nibble)
/// bytes 5-6:  yesterday's total (BCD)
/// bytes 7-11: total start date: minute, hour, day, month, year (BCD)
/// byte 12:    checksum
/// ```
fn decode_rain(frame: &[u8]) -> RainReading {
    let current_rain =
        decode_bcd(frame[1]) as u16 + decode_bcd(frame[2] & 0x0F) as u16 * 100;

    let total_rain = decode_bcd(frame[2] & 0xF0) as f32 / 100.0
        + decode_bcd(frame[3]) as f32
        + decode_bcd(frame[4]) as f32 * 100.0;

    let yesterday_rain = decode_bcd(frame[5]) as u16 + decode_bcd(frame[6]) as u16 * 100;

    let total_since = RainTotalStart {
        minute: decode_bcd(frame[7]),
        hour: decode_bcd(frame[8]),
        day: decode_bcd(frame[9]),
        month: decode_bcd(frame[10]),
        year: decode_bcd(frame[11]),
    };

    RainReading {
        battery_low: frame[0] & BATTERY_LOW_BIT != 0,
        rate_over: frame[0] & RAIN_RATE_OVER_BIT != 0,
        total_over: frame[0] & RAIN_TOTAL_OVER_BIT != 0,
        yesterday_over: frame[0] & RAIN_YESTERDAY_OVER_BIT != 0,
        current_rain,
        total_rain,
        yesterday_rain,
        total_since,
    }
}

/// Outdoor thermo-hygrometer frame layout (6 bytes):
///
/// ```text
/// byte 0: flags (bit 6 battery, bit 7 temperature sign, bit 4 dew under)
/// byte 1: temperature 1/10ths (BCD)
/// byte 2: temperature tens (low 6 bits, BCD)
/// byte 3: humidity (BCD)
/// byte 4: dew point hundreds (BCD)
/// byte 5: checksum
/// ```
fn decode_outdoor_thermo_hygro(frame: &[u8]) -> OutdoorThermoHygroReading {
    let mut temperature =
        decode_bcd(frame[1]) as f32 * 0.1 + decode_bcd(frame[2] & 0x3F) as f32 * 10.0;
    if frame[0] & TEMP_SIGN_BIT != 0 {
        temperature = -temperature;
    }

    OutdoorThermoHygroReading {
        battery_low: frame[0] & BATTERY_LOW_BIT != 0,
        temperature,
        humidity: decode_bcd(frame[3]),
        dew_under: frame[0] & DEW_UNDER_BIT != 0,
        dew_point: decode_bcd(frame[4]) as u16 * 100,
    }
}

/// Indoor temp/baro frame (11 bytes). Only the minute sub-field of byte 0 is
/// decoded; bytes 1..=9 are consumed for checksum and alignment but their
/// layout is unknown and left undecoded.
fn decode_indoor(frame: &[u8]) -> IndoorReading {
    IndoorReading {
        battery_low: frame[0] & BATTERY_LOW_BIT != 0,
        minute: decode_bcd(frame[0] & MINUTE_VALUE_MASK),
    }
}

/// Minute frame (2 bytes): BCD minute in byte 0 with the battery flag in
/// bit 7, then the checksum.
fn decode_minute(frame: &[u8]) -> MinuteReading {
    MinuteReading {
        battery_low: frame[0] & MINUTE_BATTERY_LOW_BIT != 0,
        minute: decode_bcd(frame[0] & MINUTE_VALUE_MASK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to append the checksum a device would transmit for a payload.
    fn framed(device: DeviceCode, payload: &[u8]) -> Vec<u8> {
        let mut frame = payload.to_vec();
        frame.push(frame_checksum(device.code(), payload));
        frame
    }

    fn decoded(device: DeviceCode, payload: &[u8]) -> Measurement {
        decode_frame(device, &framed(device, payload))
            .expect("decode")
            .expect("measurement")
    }

    #[test]
    fn test_wind_decode() {
        let m = decoded(
            DeviceCode::Wind,
            &[0x00, 0x12, 0x03, 0x45, 0x10, 0x20, 0x07],
        );
        let Measurement::Wind(wind) = m else {
            panic!("expected wind reading, got {m:?}");
        };
        assert_eq!(wind.direction_degrees, 312);
        assert_eq!(wind.gust_speed, 45.0);
        assert_eq!(wind.average_speed, 1.0);
        assert_eq!(wind.wind_chill, 7.0);
        assert!(!wind.battery_low);
        assert!(!wind.average_over);
        assert!(!wind.gust_over);
        assert!(!wind.chill_over);
        // byte 5 bit 5 is set in this frame
        assert!(wind.chill_no_data);
    }

    #[test]
    fn test_wind_chill_sign_and_alarms() {
        let m = decoded(
            DeviceCode::Wind,
            &[0x70, 0x00, 0x00, 0x00, 0x00, 0x80, 0x15],
        );
        let Measurement::Wind(wind) = m else {
            panic!("expected wind reading");
        };
        assert_eq!(wind.wind_chill, -15.0);
        assert!(wind.battery_low);
        assert!(wind.average_over);
        assert!(wind.gust_over);
        assert!(!wind.chill_no_data);
    }

    #[test]
    fn test_rain_decode() {
        // current 123, total 645.70, yesterday 98, started 07:05 on 3 Nov 2007
        let m = decoded(
            DeviceCode::Rain,
            &[
                0x00, 0x23, 0x71, 0x45, 0x06, 0x98, 0x00, 0x05, 0x07, 0x03, 0x11, 0x07,
            ],
        );
        let Measurement::Rain(rain) = m else {
            panic!("expected rain reading");
        };
        assert_eq!(rain.current_rain, 123);
        assert!((rain.total_rain - 645.70).abs() < 1e-3);
        assert_eq!(rain.yesterday_rain, 98);
        assert_eq!(rain.total_since.to_string(), "0711030705");
        assert!(!rain.rate_over);
        assert!(!rain.total_over);
        assert!(!rain.yesterday_over);
    }

    #[test]
    fn test_rain_alarm_bits() {
        let m = decoded(
            DeviceCode::Rain,
            &[
                0xB0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            ],
        );
        let Measurement::Rain(rain) = m else {
            panic!("expected rain reading");
        };
        assert!(rain.rate_over);
        assert!(rain.total_over);
        assert!(rain.yesterday_over);
        assert!(!rain.battery_low);
    }

    #[test]
    fn test_outdoor_thermo_hygro_decode() {
        // 21.5 degrees, 64% humidity, dew point band 12 -> 1200
        let m = decoded(DeviceCode::OutdoorThermoHygro, &[0x00, 0x15, 0x02, 0x64, 0x12]);
        let Measurement::OutdoorThermoHygro(oth) = m else {
            panic!("expected outdoor reading");
        };
        assert!((oth.temperature - 21.5).abs() < 1e-5);
        assert_eq!(oth.humidity, 64);
        assert_eq!(oth.dew_point, 1200);
        assert!(!oth.dew_under);
    }

    #[test]
    fn test_outdoor_temperature_sign() {
        let m = decoded(DeviceCode::OutdoorThermoHygro, &[0x90, 0x58, 0x00, 0x30, 0x00]);
        let Measurement::OutdoorThermoHygro(oth) = m else {
            panic!("expected outdoor reading");
        };
        assert!((oth.temperature + 5.8).abs() < 1e-5);
        assert!(oth.dew_under);
        assert!(!oth.battery_low);
    }

    #[test]
    fn test_indoor_decode_extracts_only_minute() {
        let m = decoded(
            DeviceCode::IndoorTempBaro,
            &[0x33, 0x12, 0x34, 0x56, 0x78, 0x90, 0x12, 0x34, 0x56, 0x78],
        );
        let Measurement::Indoor(indoor) = m else {
            panic!("expected indoor reading");
        };
        assert_eq!(indoor.minute, 33);
        assert!(!indoor.battery_low);
    }

    #[test]
    fn test_minute_decode() {
        let m = decoded(DeviceCode::Minute, &[0x25]);
        let Measurement::Minute(tick) = m else {
            panic!("expected minute reading");
        };
        assert_eq!(tick.minute, 25);
        assert!(!tick.battery_low);
    }

    #[test]
    fn test_minute_battery_uses_bit_7() {
        let m = decoded(DeviceCode::Minute, &[0xA5]);
        let Measurement::Minute(tick) = m else {
            panic!("expected minute reading");
        };
        assert!(tick.battery_low);
        // bit 7 is masked out of the BCD value
        assert_eq!(tick.minute, 25);
    }

    #[test]
    fn test_checksum_mismatch_produces_no_measurement() {
        let mut frame = framed(DeviceCode::Minute, &[0x25]);
        frame[0] ^= 0x01;
        let err = decode_frame(DeviceCode::Minute, &frame).unwrap_err();
        match err {
            ProtocolError::ChecksumMismatch {
                device,
                expected,
                actual,
            } => {
                assert_eq!(device, DeviceCode::Minute);
                assert_eq!(actual, 0x33);
                assert_eq!(expected, 0x32);
            }
            other => panic!("expected checksum mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_reserved_devices_decode_to_nothing() {
        for device in [
            DeviceCode::ThermoHygro,
            DeviceCode::Thermo,
            DeviceCode::ThermoHygroBaro,
            DeviceCode::Clock,
        ] {
            assert_eq!(decode_frame(device, &[]).expect("no-op decode"), None);
        }
    }

    #[test]
    fn test_wrong_frame_length_is_rejected() {
        let err = decode_frame(DeviceCode::Wind, &[0x00, 0x00]).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::BadFrameLength {
                device: DeviceCode::Wind,
                expected: 8,
                actual: 2,
            }
        ));
    }
}
