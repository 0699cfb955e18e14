//! Protocol constants
//!
//! These constants define the device codes, frame lengths, and status bit
//! masks used by the weather station console protocol.

// ============================================================================
// Frame marker
// ============================================================================

/// Frame-start marker byte; two in a row precede every device code.
pub const FRAME_MARKER: u8 = 0xFF;

// ============================================================================
// Device codes
// ============================================================================

/// Anemometer (wind direction, gust/average speed, wind chill).
pub const DEV_WIND: u8 = 0;
/// Rain gauge (rate, totals, alarms).
pub const DEV_RAIN: u8 = 1;
/// Thermo-hygrometer (reserved, payload undecoded).
pub const DEV_THERMO_HYGRO: u8 = 2;
/// Outdoor "mushroom" thermo-hygrometer.
pub const DEV_OUTDOOR_THERMO_HYGRO: u8 = 3;
/// Thermometer (reserved, payload undecoded).
pub const DEV_THERMO: u8 = 4;
/// Thermo-hygro-barometer (reserved, payload undecoded).
pub const DEV_THERMO_HYGRO_BARO: u8 = 5;
/// Indoor temperature/barometer gauge (only the minute field is decoded).
pub const DEV_INDOOR_TEMP_BARO: u8 = 6;
/// Minute tick from the console clock.
pub const DEV_MINUTE: u8 = 14;
/// Clock (reserved, payload undecoded).
pub const DEV_CLOCK: u8 = 15;

// ============================================================================
// Frame lengths (including the trailing checksum byte)
// ============================================================================

/// Wind frame length.
pub const WIND_FRAME_LEN: usize = 8;
/// Rain frame length.
pub const RAIN_FRAME_LEN: usize = 13;
/// Outdoor thermo-hygrometer frame length.
pub const OUTDOOR_TH_FRAME_LEN: usize = 6;
/// Indoor temp/baro frame length.
pub const INDOOR_FRAME_LEN: usize = 11;
/// Minute frame length.
pub const MINUTE_FRAME_LEN: usize = 2;

// ============================================================================
// Status bits (byte 0 of the frame unless noted)
// ============================================================================

/// Sensor battery low. All sensors except the minute tick use bit 6.
pub const BATTERY_LOW_BIT: u8 = 0x40;
/// Battery low on minute frames, which use bit 7 instead.
pub const MINUTE_BATTERY_LOW_BIT: u8 = 0x80;

/// Wind: average speed over the alarm threshold.
pub const WIND_AVERAGE_OVER_BIT: u8 = 0x20;
/// Wind: gust speed over the alarm threshold.
pub const WIND_GUST_OVER_BIT: u8 = 0x10;
/// Wind: no wind-chill data available (byte 5).
pub const WIND_CHILL_NO_DATA_BIT: u8 = 0x20;
/// Wind: wind chill over range (byte 5).
pub const WIND_CHILL_OVER_BIT: u8 = 0x40;
/// Wind: wind chill is negative (byte 5).
pub const WIND_CHILL_SIGN_BIT: u8 = 0x80;

/// Rain: rate over the alarm threshold.
pub const RAIN_RATE_OVER_BIT: u8 = 0x10;
/// Rain: running total over the alarm threshold.
pub const RAIN_TOTAL_OVER_BIT: u8 = 0x20;
/// Rain: yesterday's total over the alarm threshold.
pub const RAIN_YESTERDAY_OVER_BIT: u8 = 0x80;

/// Outdoor thermo-hygrometer: dew point under range.
pub const DEW_UNDER_BIT: u8 = 0x10;
/// Outdoor thermo-hygrometer: temperature is negative.
pub const TEMP_SIGN_BIT: u8 = 0x80;

/// Mask selecting the BCD minute value in minute and indoor frames.
pub const MINUTE_VALUE_MASK: u8 = 0x7F;
