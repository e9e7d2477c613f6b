//! In memory stand-in for an MPU6050 on an I2C bus, good enough to run the DMP bring-up against.
//!
//! The simulated chip has a flat register file, the banked DMP memory behind `BANK_SEL`,
//! `MEM_START_ADDR` and `MEM_R_W`, and a FIFO that only counts bytes. While both the DMP and the
//! FIFO are enabled every read of `FIFO_COUNT_H` makes the FIFO grow, as if the DMP produced
//! output in between polls. Every transfer is recorded, and a few faults can be injected.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::memory::MAX_BANK;
use crate::registers::*;
use crate::MPU6050_DEFAULT_I2C_ADDR;

/// Number of banks the simulated DMP memory has, all banks `BANK_SEL` can address.
pub const SIM_MEMORY_BANKS: usize = MAX_BANK as usize + 1;

const FIFO_CAPACITY: usize = 1024;

/// One transfer seen by the simulated chip.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Bytes written starting at `register`.
    Write { register: u8, data: Vec<u8> },
    /// `len` bytes read starting at `register`.
    Read { register: u8, len: usize },
    /// Bytes written through `MEM_R_W` starting at `(bank, address)`.
    MemoryWrite { bank: u8, address: u8, data: Vec<u8> },
    /// `len` bytes read through `MEM_R_W` starting at `(bank, address)`.
    MemoryRead { bank: u8, address: u8, len: usize },
}

#[derive(Debug, Clone, Copy, Default)]
struct Faults {
    /// The n-th (1 based) read transfer of `MEM_R_W` is not acknowledged.
    nack_memory_read: Option<usize>,
    /// The n-th (1 based) read transfer of `MEM_R_W` returns its first byte inverted.
    corrupt_memory_read: Option<usize>,
    /// Writes to this register are not acknowledged.
    nack_register_write: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct SimDevice {
    address: u8,
    registers: [u8; 256],
    memory: Vec<u8>,
    pointer: u8,
    fifo_len: usize,
    fifo_growth: usize,
    memory_reads: usize,
    faults: Faults,
    events: Vec<Event>,
}

impl Default for SimDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDevice {
    /// A freshly powered chip at the default address, asleep, with gyro offset TC trims
    /// `[0x1A, 0x05, 0x3F]`, hardware revision 2 and a FIFO that grows 1 byte per count poll.
    ///
    pub fn new() -> Self {
        let mut sim = SimDevice {
            address: MPU6050_DEFAULT_I2C_ADDR,
            registers: [0u8; 256],
            memory: vec![0u8; SIM_MEMORY_BANKS * DMP_MEMORY_BANK_SIZE],
            pointer: 0,
            fifo_len: 0,
            fifo_growth: 1,
            memory_reads: 0,
            faults: Faults::default(),
            events: Vec::new(),
        };
        sim.power_on_registers();
        sim.set_trims([0x1A, 0x05, 0x3F]);
        sim.registers[XG_OFFS_TC as usize] |= 1 << TC_OTP_BNK_VLD_BIT;
        sim.set_memory(0x10, 0x06, &[0x02]);
        sim
    }

    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_gyro_offset_tcs(mut self, trims: [u8; 3]) -> Self {
        self.set_trims(trims);
        self
    }

    pub fn with_revision(mut self, revision: u8) -> Self {
        self.set_memory(0x10, 0x06, &[revision]);
        self
    }

    /// Bytes the FIFO grows per `FIFO_COUNT_H` read while the DMP runs, 0 never produces output.
    ///
    pub fn with_fifo_growth(mut self, bytes: usize) -> Self {
        self.fifo_growth = bytes;
        self
    }

    pub fn nack_memory_read(mut self, nth: usize) -> Self {
        self.faults.nack_memory_read = Some(nth);
        self
    }

    pub fn corrupt_memory_read(mut self, nth: usize) -> Self {
        self.faults.corrupt_memory_read = Some(nth);
        self
    }

    pub fn nack_register_write(mut self, register: u8) -> Self {
        self.faults.nack_register_write = Some(register);
        self
    }

    pub fn register(&self, register: u8) -> u8 {
        self.registers[register as usize]
    }

    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[register as usize] = value;
    }

    pub fn memory(&self, bank: u8, address: u8, len: usize) -> &[u8] {
        let start = bank as usize * DMP_MEMORY_BANK_SIZE + address as usize;
        &self.memory[start..start + len]
    }

    pub fn set_memory(&mut self, bank: u8, address: u8, data: &[u8]) {
        let start = bank as usize * DMP_MEMORY_BANK_SIZE + address as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn fifo_len(&self) -> usize {
        self.fifo_len
    }

    pub fn set_fifo_len(&mut self, len: usize) {
        self.fifo_len = len.min(FIFO_CAPACITY);
    }

    /// Number of `MEM_R_W` read transfers so far.
    ///
    pub fn memory_reads(&self) -> usize {
        self.memory_reads
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Every value written to `BANK_SEL`, in order.
    ///
    pub fn bank_selects(&self) -> Vec<u8> {
        self.register_writes(DMP_BANK_SEL)
    }

    /// `(bank, address, length)` of every `MEM_R_W` write transfer, in order.
    ///
    pub fn memory_writes(&self) -> Vec<(u8, u8, usize)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::MemoryWrite { bank, address, data } => Some((*bank, *address, data.len())),
                _ => None,
            })
            .collect()
    }

    /// Every value written to `register`, in order. Burst writes that run through the register
    /// count as well.
    ///
    pub fn register_writes(&self, register: u8) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Write { register: start, data } => {
                    let index = register.wrapping_sub(*start) as usize;
                    data.get(index).copied()
                }
                _ => None,
            })
            .collect()
    }

    fn power_on_registers(&mut self) {
        // Gyro offset TC registers keep their factory trims across a reset.
        let trims = [
            self.registers[XG_OFFS_TC as usize],
            self.registers[YG_OFFS_TC as usize],
            self.registers[ZG_OFFS_TC as usize],
        ];
        self.registers = [0u8; 256];
        self.registers[..3].copy_from_slice(&trims);
        self.registers[PWR_MGMT_1 as usize] = 1 << PWR1_SLEEP_BIT;
        self.registers[WHO_AM_I as usize] = MPU6050_DEFAULT_I2C_ADDR;
        self.fifo_len = 0;
    }

    fn set_trims(&mut self, trims: [u8; 3]) {
        for (register, trim) in [XG_OFFS_TC, YG_OFFS_TC, ZG_OFFS_TC].into_iter().zip(trims) {
            let state = self.registers[register as usize];
            self.registers[register as usize] =
                crate::utils::insert_bits(state, TC_OFFSET_BIT, TC_OFFSET_LENGTH, trim);
        }
    }

    fn memory_index(&self) -> usize {
        let bank = (self.registers[DMP_BANK_SEL as usize] & MAX_BANK) as usize;
        bank * DMP_MEMORY_BANK_SIZE + self.registers[DMP_MEM_START_ADDR as usize] as usize
    }

    fn dmp_running(&self) -> bool {
        let ctrl = self.registers[USER_CTRL as usize];
        ctrl & (1 << USERCTRL_DMP_EN_BIT) != 0 && ctrl & (1 << USERCTRL_FIFO_EN_BIT) != 0
    }

    fn read_register(&mut self, register: u8) -> u8 {
        match register {
            FIFO_COUNT_H => {
                if self.dmp_running() && self.fifo_growth > 0 {
                    self.fifo_len = (self.fifo_len + self.fifo_growth).min(FIFO_CAPACITY);
                    self.registers[INT_STATUS as usize] |= 1 << INTERRUPT_DMP_INT_BIT;
                }
                (self.fifo_len >> 8) as u8
            }
            FIFO_COUNT_L => self.fifo_len as u8,
            FIFO_R_W => {
                self.fifo_len = self.fifo_len.saturating_sub(1);
                0
            }
            INT_STATUS => core::mem::take(&mut self.registers[INT_STATUS as usize]),
            DMP_MEM_R_W => {
                let value = self.memory[self.memory_index()];
                self.advance_memory_address();
                value
            }
            _ => self.registers[register as usize],
        }
    }

    fn write_register(&mut self, register: u8, value: u8) {
        match register {
            PWR_MGMT_1 if value & (1 << PWR1_DEVICE_RESET_BIT) != 0 => self.power_on_registers(),
            USER_CTRL => {
                if value & (1 << USERCTRL_FIFO_RESET_BIT) != 0 {
                    self.fifo_len = 0;
                }
                // Reset bits clear themselves.
                self.registers[USER_CTRL as usize] = value & 0b1111_0000;
            }
            FIFO_R_W => {}
            DMP_MEM_R_W => {
                let index = self.memory_index();
                self.memory[index] = value;
                self.advance_memory_address();
            }
            _ => self.registers[register as usize] = value,
        }
    }

    fn advance_memory_address(&mut self) {
        let address = &mut self.registers[DMP_MEM_START_ADDR as usize];
        *address = address.wrapping_add(1);
    }

    fn advance_pointer(&mut self) {
        if self.pointer != FIFO_R_W && self.pointer != DMP_MEM_R_W {
            self.pointer = self.pointer.wrapping_add(1);
        }
    }

    fn memory_position(&self) -> (u8, u8) {
        (
            self.registers[DMP_BANK_SEL as usize] & MAX_BANK,
            self.registers[DMP_MEM_START_ADDR as usize],
        )
    }

    /// Applies the bytes of a write, the first one is the register pointer.
    ///
    fn finish_write(&mut self, pending: &[u8]) -> Result<(), ErrorKind> {
        let Some((&register, data)) = pending.split_first() else {
            return Ok(());
        };
        if self.faults.nack_register_write == Some(register) {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        }

        self.pointer = register;
        if data.is_empty() {
            return Ok(());
        }
        let event = if register == DMP_MEM_R_W {
            let (bank, address) = self.memory_position();
            Event::MemoryWrite { bank, address, data: data.to_vec() }
        } else {
            Event::Write { register, data: data.to_vec() }
        };
        self.events.push(event);

        for &value in data {
            self.write_register(self.pointer, value);
            self.advance_pointer();
        }
        Ok(())
    }

    fn read_transfer(&mut self, buffer: &mut [u8]) -> Result<(), ErrorKind> {
        let register = self.pointer;
        let mut corrupt = false;
        if register == DMP_MEM_R_W {
            self.memory_reads += 1;
            if self.faults.nack_memory_read == Some(self.memory_reads) {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
            }
            corrupt = self.faults.corrupt_memory_read == Some(self.memory_reads);
            let (bank, address) = self.memory_position();
            self.events.push(Event::MemoryRead { bank, address, len: buffer.len() });
        } else {
            self.events.push(Event::Read { register, len: buffer.len() });
        }

        for value in buffer.iter_mut() {
            *value = self.read_register(self.pointer);
            self.advance_pointer();
        }
        if corrupt {
            if let Some(first) = buffer.first_mut() {
                *first = !*first;
            }
        }
        Ok(())
    }
}

impl ErrorType for SimDevice {
    type Error = ErrorKind;
}

impl I2c for SimDevice {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        // Adjacent writes go out as one write on the wire.
        let mut pending: Vec<u8> = Vec::new();
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => pending.extend_from_slice(bytes),
                Operation::Read(buffer) => {
                    self.finish_write(&pending)?;
                    pending.clear();
                    self.read_transfer(buffer)?;
                }
            }
        }
        self.finish_write(&pending)
    }
}

/// Delay provider that doesn't wait but adds up how long it was asked to wait.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct SimDelay {
    pub elapsed_ns: u64,
}

impl SimDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
