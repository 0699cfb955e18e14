//! Decoded sensor measurements.
//!
//! Each reading is an immutable value assembled in a single pass by its
//! decoder; nothing mutates a reading after construction. Every reading that
//! the protocol defines a battery bit for carries its own `battery_low` flag.

use std::fmt;

use crate::device::DeviceCode;

/// One decoded sensor reading, tagged by originating device.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    /// Anemometer reading.
    Wind(WindReading),
    /// Rain gauge reading.
    Rain(RainReading),
    /// Outdoor thermo-hygrometer reading.
    OutdoorThermoHygro(OutdoorThermoHygroReading),
    /// Indoor temp/baro frame (only the minute field is decoded).
    Indoor(IndoorReading),
    /// Console minute tick.
    Minute(MinuteReading),
}

impl Measurement {
    /// The device this measurement came from.
    pub fn device(&self) -> DeviceCode {
        match self {
            Measurement::Wind(_) => DeviceCode::Wind,
            Measurement::Rain(_) => DeviceCode::Rain,
            Measurement::OutdoorThermoHygro(_) => DeviceCode::OutdoorThermoHygro,
            Measurement::Indoor(_) => DeviceCode::IndoorTempBaro,
            Measurement::Minute(_) => DeviceCode::Minute,
        }
    }

    /// The originating sensor's low-battery flag.
    pub fn battery_low(&self) -> bool {
        match self {
            Measurement::Wind(r) => r.battery_low,
            Measurement::Rain(r) => r.battery_low,
            Measurement::OutdoorThermoHygro(r) => r.battery_low,
            Measurement::Indoor(r) => r.battery_low,
            Measurement::Minute(r) => r.battery_low,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Wind(r) => r.fmt(f),
            Measurement::Rain(r) => r.fmt(f),
            Measurement::OutdoorThermoHygro(r) => r.fmt(f),
            Measurement::Indoor(r) => r.fmt(f),
            Measurement::Minute(r) => r.fmt(f),
        }
    }
}

/// Anemometer reading.
#[derive(Debug, Clone, PartialEq)]
pub struct WindReading {
    /// Sensor battery low.
    pub battery_low: bool,
    /// Average speed over the alarm threshold.
    pub average_over: bool,
    /// Gust speed over the alarm threshold.
    pub gust_over: bool,
    /// Wind direction in degrees, 0..=399 on the wire (0..=359 in practice).
    pub direction_degrees: u16,
    /// Gust speed.
    pub gust_speed: f32,
    /// Average speed.
    pub average_speed: f32,
    /// No wind-chill data available.
    pub chill_no_data: bool,
    /// Wind chill over range.
    pub chill_over: bool,
    /// Wind chill, negative when the sign bit is set.
    pub wind_chill: f32,
}

impl fmt::Display for WindReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wind: dir {}\u{b0} gust {:.2} avg {:.1} chill {:.0}",
            self.direction_degrees, self.gust_speed, self.average_speed, self.wind_chill
        )?;
        if self.average_over {
            write!(f, " [avg over]")?;
        }
        if self.gust_over {
            write!(f, " [gust over]")?;
        }
        if self.chill_no_data {
            write!(f, " [chill n/a]")?;
        }
        if self.chill_over {
            write!(f, " [chill over]")?;
        }
        Ok(())
    }
}

/// Rain gauge reading.
#[derive(Debug, Clone, PartialEq)]
pub struct RainReading {
    /// Sensor battery low.
    pub battery_low: bool,
    /// Rain rate over the alarm threshold.
    pub rate_over: bool,
    /// Running total over the alarm threshold.
    pub total_over: bool,
    /// Yesterday's total over the alarm threshold.
    pub yesterday_over: bool,
    /// Current rain rate.
    pub current_rain: u16,
    /// Running total since `total_since`.
    pub total_rain: f32,
    /// Yesterday's total.
    pub yesterday_rain: u16,
    /// When the running total was last reset.
    pub total_since: RainTotalStart,
}

impl fmt::Display for RainReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rain: current {} total {:.2} yesterday {} since {}",
            self.current_rain, self.total_rain, self.yesterday_rain, self.total_since
        )?;
        if self.rate_over {
            write!(f, " [rate over]")?;
        }
        if self.total_over {
            write!(f, " [total over]")?;
        }
        if self.yesterday_over {
            write!(f, " [yesterday over]")?;
        }
        Ok(())
    }
}

/// Date and time the rain gauge's running total started, as transmitted by
/// the console (two BCD digits per field, year without century).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainTotalStart {
    /// Minute, 0..=59.
    pub minute: u8,
    /// Hour, 0..=23.
    pub hour: u8,
    /// Day of month, 1..=31.
    pub day: u8,
    /// Month, 1..=12.
    pub month: u8,
    /// Year without century, 0..=99.
    pub year: u8,
}

impl fmt::Display for RainTotalStart {
    /// Renders as `YYMMDDHHMM`, the console's own display order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Outdoor thermo-hygrometer reading.
#[derive(Debug, Clone, PartialEq)]
pub struct OutdoorThermoHygroReading {
    /// Sensor battery low.
    pub battery_low: bool,
    /// Temperature, negative when the sign bit is set.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Dew point under range.
    pub dew_under: bool,
    /// Dew point.
    pub dew_point: u16,
}

impl fmt::Display for OutdoorThermoHygroReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "outdoor: temp {:.1} humidity {}% dew {}",
            self.temperature, self.humidity, self.dew_point
        )?;
        if self.dew_under {
            write!(f, " [dew under]")?;
        }
        Ok(())
    }
}

/// Indoor temp/baro frame. The console transmits an 11-byte frame for this
/// gauge but only the minute sub-field of byte 0 is decoded; the rest of the
/// payload is consumed for checksum and alignment only.
#[derive(Debug, Clone, PartialEq)]
pub struct IndoorReading {
    /// Gauge battery low.
    pub battery_low: bool,
    /// Minute of the hour, 0..=59.
    pub minute: u8,
}

impl fmt::Display for IndoorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "indoor: minute {:02}", self.minute)
    }
}

/// Console minute tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteReading {
    /// Battery low (bit 7 on this frame, unlike the sensors).
    pub battery_low: bool,
    /// Minute of the hour, 0..=59.
    pub minute: u8,
}

impl fmt::Display for MinuteReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minute {:02}", self.minute)
    }
}
