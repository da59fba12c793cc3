/// Bus address selected by the SA0 pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Address {
    /// SA0 tied low.
    #[default]
    Default,
    /// SA0 tied high.
    Alternate,
    /// Any other 7-bit address, e.g. behind an address translator.
    Custom(u8),
}

impl Address {
    pub const fn value(self) -> u8 {
        match self {
            Address::Default => 0x5C,
            Address::Alternate => 0x5D,
            Address::Custom(address) => address,
        }
    }
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        value.value()
    }
}

/// Upper bound on CTRL_REG2 reads while waiting for a one-shot measurement.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 1000;

/// Driver configuration.
///
/// ```
/// use lps22hb::{Address, Config};
///
/// let config = Config::builder()
///     .address(Address::Alternate)
///     .max_poll_attempts(50)
///     .build();
/// assert_eq!(config.address().value(), 0x5D);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
pub struct Config {
    #[builder(default)]
    address: Address,
    /// Zero is treated as one: the status register is always read at least once.
    #[builder(default = DEFAULT_MAX_POLL_ATTEMPTS)]
    max_poll_attempts: u32,
}

impl Config {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn max_poll_attempts(&self) -> u32 {
        self.max_poll_attempts.max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.address(), Address::Default);
        assert_eq!(config.address().value(), 0x5C);
        assert_eq!(config.max_poll_attempts(), DEFAULT_MAX_POLL_ATTEMPTS);
    }

    #[test]
    fn zero_poll_attempts_still_polls_once() {
        let config = Config::builder().max_poll_attempts(0).build();
        assert_eq!(config.max_poll_attempts(), 1);
    }

    #[test]
    fn custom_address() {
        let config = Config::builder().address(Address::Custom(0x42)).build();
        assert_eq!(u8::from(config.address()), 0x42);
    }
}
