use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, Operation};

use crate::dmp::BringupState;
use crate::utils::*;
use crate::{Error, MPU6050_DEFAULT_I2C_ADDR};

/// Driver for a single MPU6050 chip on an I2C bus.
///
/// The driver owns the bus and a delay provider for as long as it lives, use [`Mpu6050::release`]
/// to get them back.
///
pub struct Mpu6050<I, D> {
    /// i2c channel that we actually use to communicate with the MPU6050 chip.
    pub(crate) i2c: I,

    /// Delay provider used for the settle times of the bring-up sequence and FIFO polling.
    pub(crate) delay: D,

    /// i2c address that chip is located at.
    address: u8,

    /// Outcome of the last DMP bring-up attempt.
    pub(crate) bringup_state: BringupState,
}

impl<I: I2c, D: DelayNs> Mpu6050<I, D> {
    /// Create a new MPU 6050 instance with the given I2C interface, using the default address.
    ///
    pub fn new(i2c: I, delay: D) -> Self {
        Self::with_address(i2c, delay, MPU6050_DEFAULT_I2C_ADDR)
    }

    /// Create a new MPU 6050 instance for a chip at a non default address (i.e. `AD0` pulled high).
    ///
    pub fn with_address(i2c: I, delay: D, address: u8) -> Self {
        Mpu6050 {
            i2c,
            delay,
            address,
            bringup_state: BringupState::Idle,
        }
    }

    pub fn device_address(&self) -> u8 {
        self.address
    }

    /// Changes the address that subsequent transfers are sent to.
    ///
    pub fn set_device_address(&mut self, address: u8) {
        self.address = address;
    }

    /// State of the last (or currently running) DMP bring-up.
    ///
    pub fn bringup_state(&self) -> BringupState {
        self.bringup_state
    }

    /// Gives back the bus and delay provider, the chip itself is left as is.
    ///
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    pub(crate) fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    pub(crate) fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    pub fn read_byte(&mut self, register: u8) -> Result<u8, Error<I::Error>> {
        let mut state = [0u8];
        self.i2c.write_read(self.address, &[register], &mut state)?;
        Ok(state[0])
    }

    pub fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.i2c.write(self.address, &[register, value])?;
        Ok(())
    }

    /// Reads the 16 bit word stored in `register` (high byte) and `register + 1` (low byte), i.e.
    /// to read `FIFO_COUNT_H` and `FIFO_COUNT_L`:
    ///
    /// ```rs
    /// let count = self.read_word(FIFO_COUNT_H)?;
    /// ```
    ///
    pub fn read_word(&mut self, register: u8) -> Result<u16, Error<I::Error>> {
        Ok(u16::from_be_bytes(self.read_array(register)?))
    }

    pub fn write_word(&mut self, register: u8, value: u16) -> Result<(), Error<I::Error>> {
        let value = value.to_be_bytes();
        self.i2c.write(self.address, &[register, value[0], value[1]])?;
        Ok(())
    }

    /// Reads the field of `length` bits whose most significant bit is `high_bit`, the value is
    /// returned right aligned.
    ///
    pub fn read_bits(&mut self, register: u8, high_bit: u8, length: u8) -> Result<u8, Error<I::Error>> {
        Self::check_field(high_bit, length, 8)?;
        let state = self.read_byte(register)?;
        Ok(extract_bits(state, high_bit, length))
    }

    /// Writes `value` into the field of `length` bits whose most significant bit is `high_bit`.
    /// All other bits of the register keep their current value (read-modify-write), bits of
    /// `value` that do not fit in the field are dropped.
    ///
    pub fn write_bits(&mut self, register: u8, high_bit: u8, length: u8, value: u8) -> Result<(), Error<I::Error>> {
        Self::check_field(high_bit, length, 8)?;
        let state = self.read_byte(register)?;
        self.write_byte(register, insert_bits(state, high_bit, length, value))
    }

    pub fn read_bit(&mut self, register: u8, bit: u8) -> Result<bool, Error<I::Error>> {
        Ok(self.read_bits(register, bit, 1)? != 0)
    }

    pub fn write_bit(&mut self, register: u8, bit: u8, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bits(register, bit, 1, enabled as u8)
    }

    /// Same as [`Mpu6050::read_bits`] but for a field in the 16 bit word at `register`, so
    /// `high_bit` may go up to 15.
    ///
    pub fn read_bits_word(&mut self, register: u8, high_bit: u8, length: u8) -> Result<u16, Error<I::Error>> {
        Self::check_field(high_bit, length, 16)?;
        let state = self.read_word(register)?;
        Ok(extract_bits_word(state, high_bit, length))
    }

    pub fn write_bits_word(&mut self, register: u8, high_bit: u8, length: u8, value: u16) -> Result<(), Error<I::Error>> {
        Self::check_field(high_bit, length, 16)?;
        let state = self.read_word(register)?;
        self.write_word(register, insert_bits_word(state, high_bit, length, value))
    }

    /// Burst read starting at `register` into `buffer`. The chip auto increments the register
    /// pointer, except for the FIFO and DMP memory data ports which are read repeatedly.
    ///
    pub fn read_bytes(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.i2c.write_read(self.address, &[register], buffer)?;
        Ok(())
    }

    pub fn read_array<const N: usize>(&mut self, register: u8) -> Result<[u8; N], Error<I::Error>> {
        let mut data = [0u8; N];
        self.read_bytes(register, &mut data)?;
        Ok(data)
    }

    /// Burst write of `data` starting at `register`. The register pointer and the payload are sent
    /// as two adjacent write operations of a single transaction, which end up on the wire as one
    /// write so there is no need to copy them into a single buffer.
    ///
    pub fn write_bytes(&mut self, register: u8, data: &[u8]) -> Result<(), Error<I::Error>> {
        let register = [register];
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&register), Operation::Write(data)],
        )?;
        Ok(())
    }

    /// Rejects fields that don't fit in a register of `width` bits before anything is sent.
    fn check_field(high_bit: u8, length: u8, width: u8) -> Result<(), Error<I::Error>> {
        if valid_field(high_bit, length, width) {
            Ok(())
        } else {
            Err(Error::InvalidBitRange { high_bit, length })
        }
    }
}

