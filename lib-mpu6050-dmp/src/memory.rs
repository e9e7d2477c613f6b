//! Access to the memory of the DMP. The memory is split in banks of 256 bytes, a bank is selected
//! through `BANK_SEL` after which `MEM_START_ADDR` sets the address within the bank and `MEM_R_W`
//! is the data port. The chip advances the address on every byte transferred through the data
//! port but never moves on to the next bank by itself.
//!
//! Because bank selection is state kept on the chip, all memory access goes through a
//! [`MemoryBank`] handle which mutably borrows the driver for as long as the bank is in use.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::registers::*;
use crate::{Error, Mpu6050};

/// Highest bank number that fits in the `MEM_SEL` field of `BANK_SEL`.
pub const MAX_BANK: u8 = (1 << BANKSEL_MEM_SEL_LENGTH) - 1;

/// Position in DMP memory, i.e. where the next byte of a block transfer would go.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryCursor {
    pub bank: u8,
    pub address: u8,
}

impl MemoryCursor {
    /// Moves the cursor `count` bytes ahead, carrying into the next bank past address 255.
    ///
    fn advance(self, count: usize) -> Self {
        let linear = self.address as usize + count;
        MemoryCursor {
            bank: self.bank.wrapping_add((linear / DMP_MEMORY_BANK_SIZE) as u8),
            address: (linear % DMP_MEMORY_BANK_SIZE) as u8,
        }
    }
}

/// Composes the `BANK_SEL` register value.
///
pub const fn bank_select_value(bank: u8, prefetch: bool, user_bank: bool) -> u8 {
    let mut value = bank & MAX_BANK;
    if user_bank {
        value |= 1 << BANKSEL_CFG_USER_BANK_BIT;
    }
    if prefetch {
        value |= 1 << BANKSEL_PRFTCH_EN_BIT;
    }
    value
}

/// A selected DMP memory bank. While the handle lives nothing else can talk to the chip, so the
/// bank and start address can't be changed behind its back.
///
pub struct MemoryBank<'a, I, D> {
    mpu: &'a mut Mpu6050<I, D>,
    bank: u8,
    address: Option<u8>,
}

impl<'a, I: I2c, D: DelayNs> MemoryBank<'a, I, D> {
    pub fn bank(&self) -> u8 {
        self.bank
    }

    /// Address the next transfer starts at, `None` until [`MemoryBank::set_start_address`] was
    /// called for the selected bank.
    ///
    pub fn address(&self) -> Option<u8> {
        self.address
    }

    pub fn set_start_address(&mut self, address: u8) -> Result<(), Error<I::Error>> {
        self.mpu.write_byte(DMP_MEM_START_ADDR, address)?;
        self.address = Some(address);
        Ok(())
    }

    /// Reads `buffer.len()` bytes from the current address, the transfer must not run past the
    /// end of the bank.
    ///
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        let address = self.check_fits(buffer.len())?;
        if buffer.is_empty() {
            return Ok(());
        }
        self.mpu.read_bytes(DMP_MEM_R_W, buffer)?;
        self.address = Some(address.wrapping_add(buffer.len() as u8));
        Ok(())
    }

    /// Writes `data` at the current address, the transfer must not run past the end of the bank.
    ///
    pub fn write(&mut self, data: &[u8]) -> Result<(), Error<I::Error>> {
        let address = self.check_fits(data.len())?;
        if data.is_empty() {
            return Ok(());
        }
        self.mpu.write_bytes(DMP_MEM_R_W, data)?;
        self.address = Some(address.wrapping_add(data.len() as u8));
        Ok(())
    }

    pub fn read_byte(&mut self) -> Result<u8, Error<I::Error>> {
        let mut value = [0u8];
        self.read(&mut value)?;
        Ok(value[0])
    }

    pub fn write_byte(&mut self, value: u8) -> Result<(), Error<I::Error>> {
        self.write(&[value])
    }

    /// Selects another bank without giving up the borrow of the driver.
    ///
    fn select(&mut self, bank: u8, prefetch: bool, user_bank: bool) -> Result<(), Error<I::Error>> {
        self.mpu.write_byte(DMP_BANK_SEL, bank_select_value(bank, prefetch, user_bank))?;
        self.bank = bank & MAX_BANK;
        self.address = None;
        Ok(())
    }

    /// Returns the start address of a transfer of `length` bytes that stays within the bank.
    ///
    fn check_fits(&self, length: usize) -> Result<u8, Error<I::Error>> {
        let Some(address) = self.address else {
            return Err(Error::StartAddressUnset);
        };
        if length > DMP_MEMORY_BANK_SIZE - address as usize {
            return Err(Error::BankBoundary { address, length });
        }
        Ok(address)
    }

    /// Reads back a chunk that was just written at `address` and compares it with `expected`.
    ///
    fn verify_chunk(&mut self, address: u8, expected: &[u8]) -> Result<(), Error<I::Error>> {
        let mut found = [0u8; DMP_MEMORY_CHUNK_SIZE];
        let found = &mut found[..expected.len()];
        self.select(self.bank, false, false)?;
        self.set_start_address(address)?;
        self.read(found)?;

        let mismatch = expected.iter().zip(found.iter()).position(|(e, f)| e != f);
        if let Some(i) = mismatch {
            let address = address.wrapping_add(i as u8);
            log::error!(
                "Verify of mem data failed: bank {}, address {:#04x}: found {:#04x} expected {:#04x}",
                self.bank, address, found[i], expected[i]
            );
            return Err(Error::VerificationMismatch {
                bank: self.bank,
                address,
                expected: expected[i],
                found: found[i],
            });
        }
        Ok(())
    }
}

/// Size of the next chunk of a block transfer: at most one chunk, never past the end of the bank.
///
fn chunk_size(address: u8, remaining: usize) -> usize {
    usize::min(
        DMP_MEMORY_CHUNK_SIZE,
        usize::min(remaining, DMP_MEMORY_BANK_SIZE - address as usize),
    )
}

impl<I: I2c, D: DelayNs> Mpu6050<I, D> {
    /// Selects a DMP memory bank and returns a handle to read and write it.
    ///
    /// The `prefetch` and `user_bank` flags are only needed for a few undocumented locations such
    /// as the hardware revision, firmware and config transfers use neither.
    ///
    pub fn select_bank(&mut self, bank: u8, prefetch: bool, user_bank: bool) -> Result<MemoryBank<'_, I, D>, Error<I::Error>> {
        self.write_byte(DMP_BANK_SEL, bank_select_value(bank, prefetch, user_bank))?;
        Ok(MemoryBank {
            mpu: self,
            bank: bank & MAX_BANK,
            address: None,
        })
    }

    /// Reads `buffer.len()` bytes of DMP memory starting at `(bank, address)`, moving on to the
    /// next bank(s) as needed. Returns the position right after the last byte read.
    ///
    pub fn read_memory_block(&mut self, bank: u8, address: u8, buffer: &mut [u8]) -> Result<MemoryCursor, Error<I::Error>> {
        let mut cursor = MemoryCursor { bank, address };
        if bank > MAX_BANK {
            return Err(Error::BankOverflow);
        }

        let mut memory = self.select_bank(bank, false, false)?;
        let mut done = 0;
        while done < buffer.len() {
            let size = chunk_size(cursor.address, buffer.len() - done);
            memory.set_start_address(cursor.address)?;
            memory.read(&mut buffer[done..done + size])?;
            done += size;

            let next = cursor.advance(size);
            if next.bank != cursor.bank && done < buffer.len() {
                log::debug!("Finished reading bank: {}", cursor.bank);
                if next.bank > MAX_BANK {
                    return Err(Error::BankOverflow);
                }
                memory.select(next.bank, false, false)?;
            }
            cursor = next;
        }
        Ok(cursor)
    }

    /// Writes `data` to DMP memory starting at `(bank, address)` in chunks of at most
    /// `DMP_MEMORY_CHUNK_SIZE` bytes, moving on to the next bank(s) as needed. Returns the
    /// position right after the last byte written.
    ///
    /// With `verify` set every chunk is read back right after it was written. The first chunk
    /// that doesn't match stops the transfer with [`Error::VerificationMismatch`], everything
    /// written before it stays in memory.
    ///
    pub fn write_memory_block(&mut self, bank: u8, address: u8, data: &[u8], verify: bool) -> Result<MemoryCursor, Error<I::Error>> {
        let mut cursor = MemoryCursor { bank, address };
        if bank > MAX_BANK {
            return Err(Error::BankOverflow);
        }

        let mut memory = self.select_bank(bank, false, false)?;
        let mut written = 0;
        while written < data.len() {
            let size = chunk_size(cursor.address, data.len() - written);
            let chunk = &data[written..written + size];
            memory.set_start_address(cursor.address)?;
            memory.write(chunk)?;
            if verify {
                memory.verify_chunk(cursor.address, chunk)?;
            }
            written += size;

            let next = cursor.advance(size);
            if next.bank != cursor.bank && written < data.len() {
                log::debug!("Finished writing to bank: {}", cursor.bank);
                if next.bank > MAX_BANK {
                    return Err(Error::BankOverflow);
                }
                memory.select(next.bank, false, false)?;
            }
            cursor = next;
        }
        log::debug!("Wrote {} bytes of DMP memory, ending at {:?}", data.len(), cursor);
        Ok(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_select_value() {
        assert_eq!(bank_select_value(0x10, true, true), 0x70);
        assert_eq!(bank_select_value(3, false, false), 0x03);
        assert_eq!(bank_select_value(0x25, false, true), 0x25);
        assert_eq!(bank_select_value(0, true, false), 0x40);
    }

    #[test]
    fn test_chunk_size() {
        assert_eq!(chunk_size(0, 1929), 16);
        assert_eq!(chunk_size(250, 300), 6);
        assert_eq!(chunk_size(0, 3), 3);
        assert_eq!(chunk_size(255, 10), 1);
    }

    #[test]
    fn test_cursor_advance() {
        let cursor = MemoryCursor { bank: 2, address: 250 };
        assert_eq!(cursor.advance(6), MemoryCursor { bank: 3, address: 0 });
        assert_eq!(cursor.advance(300), MemoryCursor { bank: 4, address: 38 });
        assert_eq!(cursor.advance(0), cursor);
    }
}
