use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::config::{ChecksumPolicy, Config};
use crate::error::DhtError;
use crate::reading::{Frame, RawReading, Reading};
use crate::variant::Variant;

/// Driver for DHT11 / DHT22 sensors on a single open-drain data line.
///
/// `set_low` drives the line; `set_high` releases it so the pull-up holds it
/// idle-high and the sensor can answer on the same wire.
pub struct Dht<PIN, D> {
    pin: PIN,
    delay: D,
    config: Config,
}

impl<PIN, DELAY, E> Dht<PIN, DELAY>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
{
    /// Creates a driver with the default configuration for `variant`.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `variant` - The sensor family wired to `pin`.
    pub fn new(pin: PIN, delay: DELAY, variant: Variant) -> Self {
        Self::with_config(pin, delay, Config::new(variant))
    }

    /// Creates a driver with an explicit configuration.
    pub fn with_config(pin: PIN, delay: DELAY, config: Config) -> Self {
        Dht { pin, delay, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the pin and the delay provider.
    pub fn release(self) -> (PIN, DELAY) {
        (self.pin, self.delay)
    }

    /// Blocks for the variant's power-on stabilisation time.
    ///
    /// Call once after powering the sensor, before the first read.
    pub fn initialize(&mut self) {
        self.delay.delay_ms(self.config.variant.setup_delay_ms);
    }

    /// Performs one complete transaction and returns the undecoded payload.
    ///
    /// This sends the start signal, waits for the sensor's handshake, reads
    /// 5 bytes and validates the checksum according to the configured
    /// [`ChecksumPolicy`]. No retry is attempted on failure.
    ///
    /// # Returns
    ///
    /// * `Ok(RawReading)` if all 40 bits were received.
    /// * `Err(DhtError::Timeout)` if the sensor stopped answering.
    /// * `Err(DhtError::ChecksumMismatch)` on a bad checksum under the strict policy.
    pub fn read_raw(&mut self) -> Result<RawReading, DhtError<E>> {
        self.start()?;

        let mut data = [0; 5];
        for b in data.iter_mut() {
            *b = self.read_byte()?;
        }
        trace!("received frame {}", data);

        let frame = Frame::new(data);
        if !frame.is_valid() {
            match self.config.checksum {
                ChecksumPolicy::Strict => {
                    debug!(
                        "checksum mismatch: expected {=u8:#x}, got {=u8:#x}",
                        frame.expected_checksum(),
                        frame.checksum()
                    );
                    return Err(DhtError::ChecksumMismatch);
                }
                ChecksumPolicy::Lenient => {
                    warn!(
                        "ignoring checksum mismatch: expected {=u8:#x}, got {=u8:#x}",
                        frame.expected_checksum(),
                        frame.checksum()
                    );
                }
            }
        }

        Ok(RawReading::from(frame))
    }

    /// Reads the temperature in degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<f32, DhtError<E>> {
        let raw = self.read_raw()?;
        self.check_temperature(raw.temperature(&self.config.variant))
    }

    /// Reads the relative humidity in percent.
    pub fn read_humidity(&mut self) -> Result<f32, DhtError<E>> {
        let raw = self.read_raw()?;
        self.check_humidity(raw.humidity(&self.config.variant))
    }

    /// Reads temperature and humidity in one transaction.
    ///
    /// The temperature is validated first, so a frame with both values out
    /// of range reports [`DhtError::TemperatureOutOfRange`].
    pub fn read(&mut self) -> Result<Reading, DhtError<E>> {
        let reading = self.read_raw()?.decode(&self.config.variant);
        self.check_temperature(reading.temperature)?;
        self.check_humidity(reading.relative_humidity)?;
        Ok(reading)
    }

    fn check_temperature(&self, temperature: f32) -> Result<f32, DhtError<E>> {
        if self.config.variant.temperature.contains(temperature) {
            Ok(temperature)
        } else {
            Err(DhtError::TemperatureOutOfRange(temperature))
        }
    }

    fn check_humidity(&self, humidity: f32) -> Result<f32, DhtError<E>> {
        if self.config.variant.humidity.contains(humidity) {
            Ok(humidity)
        } else {
            Err(DhtError::HumidityOutOfRange(humidity))
        }
    }

    /// Sends the start signal and waits for the sensor's response.
    ///
    /// The line is held low for the variant's wake-up delay, then released.
    /// The sensor answers by pulling it low for ~80us and high for ~80us.
    fn start(&mut self) -> Result<(), DhtError<E>> {
        let timing = self.config.timing;

        // MCU sends start request
        self.pin.set_low()?;
        self.delay.delay_ms(self.config.variant.wake_delay_ms);
        self.pin.set_high()?;

        // Waiting for the sensor's response
        self.wait_for_low(timing.start_timeout_us, "response")?;
        self.wait_for_high(timing.handshake_timeout_us, "handshake low")?; // 80us
        self.wait_for_low(timing.handshake_timeout_us, "handshake high")?; // 80us
        trace!("handshake complete");
        Ok(())
    }

    /// Reads one byte (8 bits, MSB first) from the sensor.
    fn read_byte(&mut self) -> Result<u8, DhtError<E>> {
        let mut byte: u8 = 0;

        for i in 0..8 {
            let bit_mask = 1 << (7 - i);
            if self.read_bit()? {
                byte |= bit_mask;
            }
        }

        Ok(byte)
    }

    /// Reads a single bit from the sensor.
    ///
    /// Every bit starts with a ~50us low preamble. The length of the high
    /// pulse that follows encodes the value.
    fn read_bit(&mut self) -> Result<bool, DhtError<E>> {
        let timing = self.config.timing;

        self.wait_for_high(timing.bit_start_timeout_us, "bit start")?;

        // Sample after the longest "0" pulse has ended
        self.delay.delay_us(timing.sample_delay_us);
        let bit_is_one = self.pin.is_high()?;

        self.wait_for_low(timing.bit_end_timeout_us, "bit end")?;

        Ok(bit_is_one)
    }

    /// Waits until the data line goes high or times out.
    fn wait_for_high(&mut self, timeout_us: u32, phase: &'static str) -> Result<(), DhtError<E>> {
        let step = self.config.timing.poll_interval_us;
        Self::wait_for_state(&mut self.delay, step, timeout_us, phase, || {
            self.pin.is_high()
        })
    }

    /// Waits until the data line goes low or times out.
    fn wait_for_low(&mut self, timeout_us: u32, phase: &'static str) -> Result<(), DhtError<E>> {
        let step = self.config.timing.poll_interval_us;
        Self::wait_for_state(&mut self.delay, step, timeout_us, phase, || {
            self.pin.is_low()
        })
    }

    /// Polls `condition` every `step_us` until it holds or `timeout_us` has
    /// been spent sleeping.
    ///
    /// # Errors
    ///
    /// Returns `DhtError::Timeout` if the budget is exhausted.
    fn wait_for_state<F>(
        delay: &mut DELAY,
        step_us: u32,
        timeout_us: u32,
        phase: &'static str,
        mut condition: F,
    ) -> Result<(), DhtError<E>>
    where
        F: FnMut() -> Result<bool, E>,
    {
        // A zero step would never use up the budget.
        let step_us = step_us.max(1);
        let mut waited: u32 = 0;
        loop {
            if condition()? {
                return Ok(());
            }
            if waited >= timeout_us {
                debug!("timeout waiting for {=str} after {=u32}us", phase, waited);
                return Err(DhtError::Timeout);
            }
            delay.delay_us(step_us);
            waited = waited.saturating_add(step_us);
        }
    }
}
