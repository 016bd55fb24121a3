//! Sensor variant descriptors.
//!
//! A [`Variant`] fixes everything that differs between the supported sensor
//! families: valid measurement ranges, the start-signal and power-on
//! delays, and how the payload bytes are decoded.

/// Inclusive range of plausible values.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    /// Smallest accepted value.
    pub min: f32,
    /// Largest accepted value.
    pub max: f32,
}

impl Range {
    /// Creates the range `min..=max`.
    pub const fn new(min: f32, max: f32) -> Self {
        Range { min, max }
    }

    /// Returns `true` if `value` lies within `min..=max`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// How an (integral, decimal) byte pair is turned into a value.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Value is the integral byte; the decimal byte is ignored (DHT11).
    Integral,
    /// Value is the 16-bit big-endian pair in tenths. Temperature uses bit 7
    /// of the high byte as a sign bit (DHT22).
    SignMagnitudeTenths,
}

impl Encoding {
    /// Decodes a temperature in degrees Celsius.
    pub fn temperature(self, integral: u8, decimal: u8) -> f32 {
        match self {
            Encoding::Integral => integral as f32,
            Encoding::SignMagnitudeTenths => {
                let is_negative = (integral >> 7) != 0;
                let magnitude = u16::from_be_bytes([integral & 0b0111_1111, decimal]);
                let temperature = magnitude as f32 / 10.0;
                if is_negative { -temperature } else { temperature }
            }
        }
    }

    /// Decodes a relative humidity in percent.
    pub fn humidity(self, integral: u8, decimal: u8) -> f32 {
        match self {
            Encoding::Integral => integral as f32,
            Encoding::SignMagnitudeTenths => u16::from_be_bytes([integral, decimal]) as f32 / 10.0,
        }
    }
}

/// Describes one sensor family.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    /// Valid temperature range in degrees Celsius.
    pub temperature: Range,
    /// Valid relative humidity range in percent.
    pub humidity: Range,
    /// How long (ms) the line is held low to request a reading.
    pub wake_delay_ms: u32,
    /// Power-on stabilisation time (ms) before the first request.
    pub setup_delay_ms: u32,
    /// Payload decoding.
    pub encoding: Encoding,
}

impl Variant {
    /// DHT11: whole-degree, whole-percent resolution.
    pub const DHT11: Variant = Variant {
        temperature: Range::new(0.0, 50.0),
        humidity: Range::new(20.0, 90.0),
        wake_delay_ms: 50,
        setup_delay_ms: 1000,
        encoding: Encoding::Integral,
    };

    /// DHT22 / AM2302: 0.1 resolution, signed temperature.
    pub const DHT22: Variant = Variant {
        temperature: Range::new(-40.0, 80.0),
        humidity: Range::new(0.0, 100.0),
        wake_delay_ms: 20,
        setup_delay_ms: 2000,
        encoding: Encoding::SignMagnitudeTenths,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_decodes_to_zero() {
        for encoding in [Encoding::Integral, Encoding::SignMagnitudeTenths] {
            assert_eq!(encoding.temperature(0, 0), 0.0);
            assert_eq!(encoding.humidity(0, 0), 0.0);
        }
    }

    #[test]
    fn test_tenths_negative_temp() {
        // Bit 7 set => negative, [0x01, 0x0A] = 266
        assert_eq!(Encoding::SignMagnitudeTenths.temperature(0x81, 0x0A), -26.6);
    }

    #[test]
    fn test_tenths_positive_temp() {
        // [0x02, 0x05] = 517
        assert_eq!(Encoding::SignMagnitudeTenths.temperature(0x02, 0x05), 51.7);
    }

    #[test]
    fn test_tenths_humidity_has_no_sign_bit() {
        // [0x02, 0x2B] = 555
        assert_eq!(Encoding::SignMagnitudeTenths.humidity(0x02, 0x2B), 55.5);
        // 0x80 is part of the magnitude for humidity
        assert_eq!(Encoding::SignMagnitudeTenths.humidity(0x80, 0x00), 3276.8);
    }

    #[test]
    fn test_integral_ignores_decimal() {
        assert_eq!(Encoding::Integral.temperature(45, 0), 45.0);
        assert_eq!(Encoding::Integral.temperature(45, 9), 45.0);
        assert_eq!(Encoding::Integral.humidity(45, 0xFF), 45.0);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = Variant::DHT22.temperature;
        assert!(range.contains(-40.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(-40.1));
        assert!(!range.contains(80.1));

        let range = Variant::DHT11.humidity;
        assert!(range.contains(20.0));
        assert!(range.contains(90.0));
        assert!(!range.contains(19.0));
        assert!(!range.contains(91.0));
    }
}
