//! Device codes and their frame geometry.

use std::fmt;

use crate::constants::*;
use crate::error::ProtocolError;

/// The sensors a console frame can originate from.
///
/// The protocol reserves codes 2, 4, 5 and 15 but the console never puts
/// decodable payload behind them; those variants are acknowledged during
/// dispatch and skipped without consuming any frame bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceCode {
    /// Anemometer (code 0).
    Wind,
    /// Rain gauge (code 1).
    Rain,
    /// Thermo-hygrometer (code 2, undecoded).
    ThermoHygro,
    /// Outdoor "mushroom" thermo-hygrometer (code 3).
    OutdoorThermoHygro,
    /// Thermometer (code 4, undecoded).
    Thermo,
    /// Thermo-hygro-barometer (code 5, undecoded).
    ThermoHygroBaro,
    /// Indoor temperature/barometer gauge (code 6).
    IndoorTempBaro,
    /// Minute tick (code 14).
    Minute,
    /// Clock (code 15, undecoded).
    Clock,
}

impl DeviceCode {
    /// Look up the device for a wire code byte.
    pub fn from_byte(byte: u8) -> Result<Self, ProtocolError> {
        match byte {
            DEV_WIND => Ok(DeviceCode::Wind),
            DEV_RAIN => Ok(DeviceCode::Rain),
            DEV_THERMO_HYGRO => Ok(DeviceCode::ThermoHygro),
            DEV_OUTDOOR_THERMO_HYGRO => Ok(DeviceCode::OutdoorThermoHygro),
            DEV_THERMO => Ok(DeviceCode::Thermo),
            DEV_THERMO_HYGRO_BARO => Ok(DeviceCode::ThermoHygroBaro),
            DEV_INDOOR_TEMP_BARO => Ok(DeviceCode::IndoorTempBaro),
            DEV_MINUTE => Ok(DeviceCode::Minute),
            DEV_CLOCK => Ok(DeviceCode::Clock),
            other => Err(ProtocolError::UnknownDeviceCode(other)),
        }
    }

    /// The wire code byte for this device.
    pub fn code(&self) -> u8 {
        match self {
            DeviceCode::Wind => DEV_WIND,
            DeviceCode::Rain => DEV_RAIN,
            DeviceCode::ThermoHygro => DEV_THERMO_HYGRO,
            DeviceCode::OutdoorThermoHygro => DEV_OUTDOOR_THERMO_HYGRO,
            DeviceCode::Thermo => DEV_THERMO,
            DeviceCode::ThermoHygroBaro => DEV_THERMO_HYGRO_BARO,
            DeviceCode::IndoorTempBaro => DEV_INDOOR_TEMP_BARO,
            DeviceCode::Minute => DEV_MINUTE,
            DeviceCode::Clock => DEV_CLOCK,
        }
    }

    /// Fixed frame length in bytes, including the trailing checksum.
    ///
    /// `None` marks the reserved codes whose payload layout is unknown; the
    /// dispatcher acknowledges them without reading a frame.
    pub fn frame_len(&self) -> Option<usize> {
        match self {
            DeviceCode::Wind => Some(WIND_FRAME_LEN),
            DeviceCode::Rain => Some(RAIN_FRAME_LEN),
            DeviceCode::OutdoorThermoHygro => Some(OUTDOOR_TH_FRAME_LEN),
            DeviceCode::IndoorTempBaro => Some(INDOOR_FRAME_LEN),
            DeviceCode::Minute => Some(MINUTE_FRAME_LEN),
            DeviceCode::ThermoHygro
            | DeviceCode::Thermo
            | DeviceCode::ThermoHygroBaro
            | DeviceCode::Clock => None,
        }
    }

    /// Human-readable sensor label, used in logs and battery warnings.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceCode::Wind => "anemometer",
            DeviceCode::Rain => "rain gauge",
            DeviceCode::ThermoHygro => "thermo-hygrometer",
            DeviceCode::OutdoorThermoHygro => "outdoor thermo-hygrometer",
            DeviceCode::Thermo => "thermometer",
            DeviceCode::ThermoHygroBaro => "thermo-hygro-barometer",
            DeviceCode::IndoorTempBaro => "indoor temp/baro gauge",
            DeviceCode::Minute => "minute tick",
            DeviceCode::Clock => "clock",
        }
    }
}

impl fmt::Display for DeviceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_round_trips_known_codes() {
        for code in [0, 1, 2, 3, 4, 5, 6, 14, 15] {
            let device = DeviceCode::from_byte(code).expect("known code");
            assert_eq!(device.code(), code);
        }
    }

    #[test]
    fn test_unknown_codes_are_errors() {
        for code in [7, 8, 9, 13, 16, 0xFF] {
            assert!(matches!(
                DeviceCode::from_byte(code),
                Err(ProtocolError::UnknownDeviceCode(c)) if c == code
            ));
        }
    }

    #[test]
    fn test_frame_lengths() {
        assert_eq!(DeviceCode::Wind.frame_len(), Some(8));
        assert_eq!(DeviceCode::Rain.frame_len(), Some(13));
        assert_eq!(DeviceCode::OutdoorThermoHygro.frame_len(), Some(6));
        assert_eq!(DeviceCode::IndoorTempBaro.frame_len(), Some(11));
        assert_eq!(DeviceCode::Minute.frame_len(), Some(2));
        assert_eq!(DeviceCode::Clock.frame_len(), None);
    }
}
