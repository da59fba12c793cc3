use core::fmt;

/// Driver error, generic over the bus error `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus reported an error.
    I2c(E),
    /// ONE_SHOT was still set after the configured number of polls.
    Timeout,
    /// WHO_AM_I did not match.
    NotConnected,
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus error: {e:?}"),
            Error::Timeout => f.write_str("one-shot measurement did not complete"),
            Error::NotConnected => f.write_str("LPS22HB not found at the configured address"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

impl<E: embedded_hal::i2c::Error> embedded_hal::i2c::Error for Error<E> {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            Error::I2c(e) => e.kind(),
            Error::Timeout | Error::NotConnected => embedded_hal::i2c::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::{Error as _, ErrorKind, NoAcknowledgeSource};

    use super::Error;

    #[test]
    fn bus_errors_keep_their_kind() {
        let err: Error<ErrorKind> = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address).into();
        assert_eq!(
            err.kind(),
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
        );
        assert_eq!(Error::<ErrorKind>::Timeout.kind(), ErrorKind::Other);
        assert_eq!(Error::<ErrorKind>::NotConnected.kind(), ErrorKind::Other);
    }
}
