use crate::variant::Variant;

/// What to do when the received checksum does not match the payload.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    /// Reject the frame with [`DhtError::ChecksumMismatch`](crate::DhtError::ChecksumMismatch).
    #[default]
    Strict,
    /// Log a warning and return the received payload as a success.
    ///
    /// The bytes are handed back exactly as they arrived on the wire, so the
    /// decoded values may be corrupt.
    Lenient,
}

/// Microsecond budgets for the wire protocol.
///
/// Every wait polls the line, then sleeps `poll_interval_us`, until the line
/// reaches the expected level or the budget for that phase is used up.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Sleep between two samples of the line while waiting.
    pub poll_interval_us: u32,
    /// Budget for the sensor to pull the line low after the start signal.
    pub start_timeout_us: u32,
    /// Budget for each of the two ~80us handshake phases.
    pub handshake_timeout_us: u32,
    /// Budget for the ~50us low preamble of each bit.
    pub bit_start_timeout_us: u32,
    /// Budget for the high pulse of each bit to end.
    pub bit_end_timeout_us: u32,
    /// Delay after the rising edge before sampling a bit. A "0" pulse is
    /// 26-28us, a "1" pulse is ~70us.
    pub sample_delay_us: u32,
}

impl Timing {
    /// Default budgets: 2us polls, 35us sample point, 60-100us per wait.
    pub const DEFAULT: Timing = Timing {
        poll_interval_us: 2,
        start_timeout_us: 60,
        handshake_timeout_us: 100,
        bit_start_timeout_us: 70,
        bit_end_timeout_us: 100,
        sample_delay_us: 35,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Driver configuration.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Sensor family on the line.
    pub variant: Variant,
    /// Protocol timing budgets.
    pub timing: Timing,
    /// Checksum mismatch handling.
    pub checksum: ChecksumPolicy,
}

impl Config {
    /// Default timing and strict checksum validation for `variant`.
    pub const fn new(variant: Variant) -> Self {
        Config {
            variant,
            timing: Timing::DEFAULT,
            checksum: ChecksumPolicy::Strict,
        }
    }

    /// Replaces the timing budgets.
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Replaces the checksum policy.
    pub const fn with_checksum(mut self, checksum: ChecksumPolicy) -> Self {
        self.checksum = checksum;
        self
    }
}
