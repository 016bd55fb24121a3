use core::fmt;

/// Possible errors from a read transaction.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq)]
pub enum DhtError<E> {
    /// Timed out waiting for the sensor to change the line state.
    Timeout,
    /// Checksum did not match the received data.
    ChecksumMismatch,
    /// Decoded temperature (°C) lies outside the variant's valid range.
    TemperatureOutOfRange(f32),
    /// Decoded relative humidity (%) lies outside the variant's valid range.
    HumidityOutOfRange(f32),
    /// Error from the GPIO pin (input/output).
    Pin(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::Pin(value)
    }
}

impl<E: fmt::Debug> fmt::Display for DhtError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timed out waiting for the sensor"),
            Self::ChecksumMismatch => f.write_str("checksum mismatch"),
            Self::TemperatureOutOfRange(t) => write!(f, "temperature out of range: {t} C"),
            Self::HumidityOutOfRange(h) => write!(f, "humidity out of range: {h} %"),
            Self::Pin(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DhtError<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_error_lifts() {
        let err: DhtError<u8> = 7u8.into();
        assert_eq!(err, DhtError::Pin(7));
    }

    #[test]
    fn test_display() {
        let err: DhtError<()> = DhtError::TemperatureOutOfRange(81.5);
        assert_eq!(err.to_string(), "temperature out of range: 81.5 C");
        assert_eq!(
            DhtError::<()>::Timeout.to_string(),
            "timed out waiting for the sensor"
        );
    }
}
