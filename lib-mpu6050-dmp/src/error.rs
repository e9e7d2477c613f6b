use core::fmt;

/// Errors reported by the MPU6050 driver, generic over the error type `E` of the I2C bus.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C bus reported an error, the transfer may or may not have reached the chip.
    Bus(E),

    /// Reading back a freshly written chunk of DMP memory did not return what was written.
    VerificationMismatch {
        bank: u8,
        address: u8,
        expected: u8,
        found: u8,
    },

    /// A configuration record stream contained a special instruction we don't know.
    UnknownSpecialOpcode(u8),

    /// A configuration record stream ended in the middle of a record, `offset` is the position
    /// of the record header in the stream.
    TruncatedRecord { offset: usize },

    /// A bit field that does not fit in its register.
    InvalidBitRange { high_bit: u8, length: u8 },

    /// A single memory transfer would run past the end of the selected bank.
    BankBoundary { address: u8, length: usize },

    /// A memory transfer was started before the start address within the bank was set.
    StartAddressUnset,

    /// A block transfer ran past the last bank that can be selected.
    BankOverflow,

    /// The FIFO did not fill up to the expected number of bytes in time.
    FifoTimeout { count: u16, polls: u32 },

    /// `WHO_AM_I` did not hold the MPU6050 device id.
    WrongDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Bus(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "I2C bus error: {:?}", err),
            Self::VerificationMismatch { bank, address, expected, found } => write!(
                f, "DMP memory verification failed at bank {} address {:#04x}: expected {:#04x} found {:#04x}",
                bank, address, expected, found
            ),
            Self::UnknownSpecialOpcode(op) => write!(f, "Unknown DMP config special instruction {:#04x}", op),
            Self::TruncatedRecord { offset } => write!(f, "DMP config record at byte {} is truncated", offset),
            Self::InvalidBitRange { high_bit, length } => write!(
                f, "Bit field of length {} at bit {} does not fit in the register", length, high_bit
            ),
            Self::BankBoundary { address, length } => write!(
                f, "Transfer of {} bytes at address {:#04x} crosses the DMP bank boundary", length, address
            ),
            Self::StartAddressUnset => write!(f, "DMP memory start address was not set for the selected bank"),
            Self::BankOverflow => write!(f, "Transfer runs past the last DMP memory bank"),
            Self::FifoTimeout { count, polls } => write!(
                f, "FIFO still held {} bytes after {} polls", count, polls
            ),
            Self::WrongDevice(id) => write!(f, "Unexpected device id {:#04x}", id),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
