use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

use crate::data;
use crate::registers::{
    Register, CTRL_REG1_BDU, CTRL_REG2_ONE_SHOT, PRESS_OUT, TEMP_OUT, WHO_AM_I_VALUE,
};
use crate::{Config, Error};

/// LPS22HB driver.
///
/// `I2C` is usually a borrowed or shared handle (`&mut Bus`, or a device from
/// a bus-sharing crate) so the caller keeps the bus. The driver does no
/// locking: callers sharing one bus between drivers must serialize access.
/// Every call blocks until its bus transactions, and for the reads the
/// one-shot measurement, have finished.
#[derive(Debug)]
pub struct Lps22hb<I2C> {
    i2c: I2C,
    config: Config,
}

impl<I2C: I2c> Lps22hb<I2C> {
    /// Create a driver at the default address (SA0 low).
    pub fn new(i2c: I2C) -> Self {
        Self::with_config(i2c, Config::default())
    }

    pub fn with_config(i2c: I2C, config: Config) -> Self {
        Self { i2c, config }
    }

    /// 7-bit bus address of the device.
    pub fn address(&self) -> u8 {
        self.config.address().value()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Check WHO_AM_I. A bus error counts as "not present".
    pub fn is_present(&mut self) -> bool {
        self.try_is_present().unwrap_or_else(|e| {
            debug!("LPS22HB presence check failed: {e:?}");
            false
        })
    }

    /// Check WHO_AM_I, surfacing bus errors.
    pub fn try_is_present(&mut self) -> Result<bool, Error<I2C::Error>> {
        let id = self.read_register(Register::WhoAmI)?;
        if id != WHO_AM_I_VALUE {
            warn!(
                "LPS22HB at {:#04x}: unexpected WHO_AM_I {id:#04x}",
                self.address()
            );
        }
        Ok(id == WHO_AM_I_VALUE)
    }

    /// Like [`try_is_present`](Self::try_is_present), but a mismatch is
    /// [`Error::NotConnected`].
    pub fn check_connected(&mut self) -> Result<(), Error<I2C::Error>> {
        if self.try_is_present()? {
            Ok(())
        } else {
            Err(Error::NotConnected)
        }
    }

    /// Enable block data update so multi-byte outputs are never torn.
    pub fn configure(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::CtrlReg1, CTRL_REG1_BDU)
    }

    /// Trigger a measurement and return pressure in hPa × 1000.
    pub fn read_pressure(&mut self) -> Result<i32, Error<I2C::Error>> {
        self.one_shot()?;
        let mut bytes = [0u8; 3];
        for (byte, register) in bytes.iter_mut().zip(PRESS_OUT) {
            *byte = self.read_register(register)?;
        }
        let pressure = data::pressure_millis(data::raw_pressure(bytes));
        debug!("LPS22HB pressure {pressure} (raw {bytes:02x?})");
        Ok(pressure)
    }

    /// Trigger a measurement and return temperature in milli-degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<i32, Error<I2C::Error>> {
        self.one_shot()?;
        let mut bytes = [0u8; 2];
        for (byte, register) in bytes.iter_mut().zip(TEMP_OUT) {
            *byte = self.read_register(register)?;
        }
        let temperature = data::temperature_millis(data::raw_temperature(bytes));
        debug!("LPS22HB temperature {temperature} (raw {bytes:02x?})");
        Ok(temperature)
    }

    /// Set ONE_SHOT and wait for the device to clear it.
    ///
    /// Writing ONE_SHOT on its own also clears IF_ADD_INC, which is why the
    /// output registers are read one at a time afterwards.
    fn one_shot(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_register(Register::CtrlReg2, CTRL_REG2_ONE_SHOT)?;

        let max_attempts = self.config.max_poll_attempts();
        for attempt in 1..=max_attempts {
            let status = self.read_register(Register::CtrlReg2)?;
            trace!("CTRL_REG2 poll {attempt}: {status:#04x}");
            if status & CTRL_REG2_ONE_SHOT == 0 {
                return Ok(());
            }
        }
        warn!("LPS22HB one-shot still pending after {max_attempts} polls");
        Err(Error::Timeout)
    }

    fn read_register(&mut self, register: Register) -> Result<u8, Error<I2C::Error>> {
        let address = self.address();
        let mut buf = [0u8];
        self.i2c.write_read(address, &[register.addr()], &mut buf)?;
        debug!("I2C read {register:?} -> {:#04x}", buf[0]);
        Ok(buf[0])
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        let address = self.address();
        debug!("I2C write {register:?} <- {value:#04x}");
        self.i2c.write(address, &[register.addr(), value])?;
        Ok(())
    }
}
