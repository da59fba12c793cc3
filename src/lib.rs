//! Blocking [`embedded-hal`](embedded_hal) driver for the ST LPS22HB MEMS
//! pressure and temperature sensor.
//!
//! Every reading triggers a single one-shot conversion and polls until the
//! device reports it complete. Results are fixed-point integers: pressure in
//! hPa × 1000, temperature in milli-degrees Celsius.
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! # let mut bus = I2cMock::new(&[
//! #     I2cTransaction::write_read(0x5C, vec![0x0F], vec![0xB1]),
//! #     I2cTransaction::write(0x5C, vec![0x10, 0x02]),
//! #     I2cTransaction::write(0x5C, vec![0x11, 0x01]),
//! #     I2cTransaction::write_read(0x5C, vec![0x11], vec![0x00]),
//! #     I2cTransaction::write_read(0x5C, vec![0x2B], vec![0xE8]),
//! #     I2cTransaction::write_read(0x5C, vec![0x2C], vec![0x03]),
//! # ]);
//! use lps22hb::Lps22hb;
//!
//! let mut sensor = Lps22hb::new(&mut bus);
//! assert!(sensor.is_present());
//! sensor.configure()?;
//! assert_eq!(sensor.read_temperature()?, 10_000);
//! # bus.done();
//! # Ok::<(), lps22hb::Error<embedded_hal::i2c::ErrorKind>>(())
//! ```
#![no_std]

mod config;
mod data;
mod device;
mod error;
pub mod registers;

pub use config::{Address, Config, DEFAULT_MAX_POLL_ATTEMPTS};
pub use device::Lps22hb;
pub use error::Error;
