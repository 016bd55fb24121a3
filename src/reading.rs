use crate::variant::Variant;

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Converts degrees Celsius to Kelvin.
pub fn to_kelvin(celsius: f32) -> f32 {
    celsius + 273.15
}

/// The five bytes of one transmission: four payload bytes and a checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame([u8; 5]);

impl Frame {
    /// Wraps five bytes in wire order, checksum last.
    pub const fn new(bytes: [u8; 5]) -> Self {
        Frame(bytes)
    }

    /// The four payload bytes.
    pub fn payload(&self) -> [u8; 4] {
        let [a, b, c, d, _] = self.0;
        [a, b, c, d]
    }

    /// The checksum byte as received.
    pub fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Sum of the payload bytes, modulo 256.
    pub fn expected_checksum(&self) -> u8 {
        self.payload().iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
    }

    /// Returns `true` if the received checksum matches the payload.
    pub fn is_valid(&self) -> bool {
        self.expected_checksum() == self.checksum()
    }
}

/// Payload of a transaction, as sent by the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawReading {
    /// Integral part of the humidity (high byte on DHT22).
    pub humidity_integral: u8,
    /// Decimal part of the humidity (low byte on DHT22).
    pub humidity_decimal: u8,
    /// Integral part of the temperature; bit 7 is the sign on DHT22.
    pub temperature_integral: u8,
    /// Decimal part of the temperature (low byte on DHT22).
    pub temperature_decimal: u8,
}

impl RawReading {
    /// Builds a reading from the payload bytes in wire order.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        let [humidity_integral, humidity_decimal, temperature_integral, temperature_decimal] =
            bytes;
        RawReading {
            humidity_integral,
            humidity_decimal,
            temperature_integral,
            temperature_decimal,
        }
    }

    /// Returns the payload bytes in wire order.
    pub const fn to_bytes(self) -> [u8; 4] {
        [
            self.humidity_integral,
            self.humidity_decimal,
            self.temperature_integral,
            self.temperature_decimal,
        ]
    }

    /// Temperature in degrees Celsius, decoded per `variant`.
    pub fn temperature(&self, variant: &Variant) -> f32 {
        variant
            .encoding
            .temperature(self.temperature_integral, self.temperature_decimal)
    }

    /// Relative humidity in percent, decoded per `variant`.
    pub fn humidity(&self, variant: &Variant) -> f32 {
        variant
            .encoding
            .humidity(self.humidity_integral, self.humidity_decimal)
    }

    /// Decodes both values. No range validation is applied.
    pub fn decode(&self, variant: &Variant) -> Reading {
        Reading {
            temperature: self.temperature(variant),
            relative_humidity: self.humidity(variant),
        }
    }
}

impl From<Frame> for RawReading {
    fn from(frame: Frame) -> Self {
        RawReading::from_bytes(frame.payload())
    }
}

/// Reading returned by the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl Reading {
    /// Temperature in degrees Fahrenheit.
    pub fn fahrenheit(&self) -> f32 {
        to_fahrenheit(self.temperature)
    }

    /// Temperature in Kelvin.
    pub fn kelvin(&self) -> f32 {
        to_kelvin(self.temperature)
    }
}
