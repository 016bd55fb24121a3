//! DHT11 / DHT22 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 and DHT22 (AM2302)
//! temperature and humidity sensors, built on top of the [`embedded-hal`] traits.
//! Both sensors talk over a single open-drain data line using pulse-width encoded bits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Sensor family chosen at runtime through a [`Variant`] descriptor
//! - Checksum and plausible-range validation
//! - Optional logging support via `defmt`
//!
//! # Example
//!
//! ```ignore
//! let mut dht = Dht::new(pin, delay, Variant::DHT22);
//! dht.initialize();
//!
//! match dht.read() {
//!     Ok(reading) => { /* reading.temperature, reading.relative_humidity */ }
//!     Err(DhtError::Timeout) => { /* sensor did not answer, retry later */ }
//!     Err(e) => { /* ... */ }
//! }
//! ```
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and emits
//!   protocol traces
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod dht;
pub mod error;
pub mod reading;
pub mod variant;

pub use config::{ChecksumPolicy, Config, Timing};
pub use dht::Dht;
pub use error::DhtError;
pub use reading::{Frame, RawReading, Reading, to_fahrenheit, to_kelvin};
pub use variant::{Encoding, Range, Variant};
