use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::DEFAULT_SPECIAL_INT_ENABLE;
use crate::memory::MemoryCursor;
use crate::registers::INT_ENABLE;
use crate::{Error, Mpu6050};

use super::{ConfigRecord, ConfigRecords};

/// Special instruction that enables the DMP related interrupts.
pub const SPECIAL_ENABLE_INTERRUPTS: u8 = 0x01;

impl<I: I2c, D: DelayNs> Mpu6050<I, D> {
    /// Writes a DMP firmware image into memory starting at bank 0, address 0, verifying every
    /// chunk. Returns the position right after the image.
    ///
    pub fn load_firmware(&mut self, image: &[u8]) -> Result<MemoryCursor, Error<I::Error>> {
        log::info!("Writing DMP code to MPU memory banks ({} bytes)", image.len());
        let end = self.write_memory_block(0, 0, image, true)?;
        log::info!("DMP code written and verified");
        Ok(end)
    }

    /// Applies a DMP configuration record stream, see [`ConfigRecords`] for the format. Special
    /// instruction `0x01` enables the DMP interrupts with the default mask.
    ///
    /// Returns the number of bytes consumed, which is the length of the stream on success. The
    /// first failing record aborts the rest of the stream.
    ///
    pub fn apply_config_set(&mut self, stream: &[u8]) -> Result<usize, Error<I::Error>> {
        self.apply_config_set_with(stream, DEFAULT_SPECIAL_INT_ENABLE)
    }

    /// Same as [`Mpu6050::apply_config_set`] with the `INT_ENABLE` value of special instruction
    /// `0x01` given by the caller.
    ///
    pub fn apply_config_set_with(&mut self, stream: &[u8], special_int_enable: u8) -> Result<usize, Error<I::Error>> {
        log::info!("Writing DMP configuration ({} bytes)", stream.len());
        let mut records = ConfigRecords::new(stream);
        let mut count = 0;
        for record in records.by_ref() {
            let record = record.map_err(|err| err.into_error::<I::Error>())?;
            self.apply_record(&record, special_int_enable)?;
            count += 1;
        }
        log::info!("DMP configuration written and verified ({} records)", count);
        Ok(records.consumed())
    }

    pub(crate) fn apply_record(&mut self, record: &ConfigRecord, special_int_enable: u8) -> Result<(), Error<I::Error>> {
        match *record {
            ConfigRecord::Patch { bank, offset, data } => {
                log::debug!("Writing config block to bank {}, offset {:#04x}, length {}", bank, offset, data.len());
                self.write_memory_block(bank, offset, data, true)?;
            }
            ConfigRecord::Special { opcode: SPECIAL_ENABLE_INTERRUPTS, .. } => {
                log::debug!("Special instruction: enabling DMP interrupts");
                self.write_byte(INT_ENABLE, special_int_enable)?;
            }
            ConfigRecord::Special { opcode, .. } => {
                log::error!("Unknown DMP config special instruction {:#04x}", opcode);
                return Err(Error::UnknownSpecialOpcode(opcode));
            }
        }
        Ok(())
    }
}
