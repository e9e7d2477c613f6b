use crate::registers::I2C_SLV0_ADDR;

/// One of the four regular slaves of the auxiliary I2C master.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cSlave {
    Slave0 = 0,
    Slave1 = 1,
    Slave2 = 2,
    Slave3 = 3,
}

impl I2cSlave {
    /// `I2C_SLVn_ADDR` register of this slave, each slave has an `ADDR`, `REG` and `CTRL`
    /// register in that order.
    ///
    pub fn address_register(&self) -> u8 {
        I2C_SLV0_ADDR + (*self as u8) * 3
    }

    /// `I2C_SLVn_REG`, the register of the slave that transfers start at.
    ///
    pub fn data_register(&self) -> u8 {
        self.address_register() + 1
    }

    pub fn control_register(&self) -> u8 {
        self.address_register() + 2
    }
}
