use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::registers::*;
use crate::{
    AccelScaleRange, ClockSource, DLPFMode, Error, ExtSync, GyroScaleRange, I2cSlave, Mpu6050,
    RawMotion, MPU6050_DEVICE_ID,
};

/// Largest number of FIFO bytes read in a single burst when draining the FIFO.
const FIFO_DRAIN_CHUNK: usize = 32;

impl<I: I2c, D: DelayNs> Mpu6050<I, D> {
    /// Basic setup for reading raw sensor values without the DMP: clock from the X gyro PLL,
    /// gyro at ±250 °/s, accelerometer at ±2 g and the chip woken from sleep.
    ///
    pub fn initialize(&mut self) -> Result<(), Error<I::Error>> {
        self.set_clock_source(ClockSource::GyroX)?;
        self.set_gyro_scale(GyroScaleRange::D250)?;
        self.set_accel_scale(AccelScaleRange::G2)?;
        self.set_sleep_enabled(false)
    }

    /// Gets the device ID of this MPU6050 chip, practically speaking this just gets bits 6:1 of
    /// the `WHO_AM_I` register.
    ///
    pub fn get_device_id(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_bits(WHO_AM_I, WHO_AM_I_BIT, WHO_AM_I_LENGTH)
    }

    /// Checks if the i2c connection with the MPU6050 chip is working as expected, practically
    /// speaking this function just checks if it can read the device ID and if the device ID is
    /// the expected value.
    ///
    pub fn test_connection(&mut self) -> Result<(), Error<I::Error>> {
        let id = self.get_device_id()?;
        if id == MPU6050_DEVICE_ID {
            Ok(())
        } else {
            Err(Error::WrongDevice(id))
        }
    }

    /// Gets the current gyroscope, acceleration, and temperature registers in a single burst.
    ///
    pub fn read_raw(&mut self) -> Result<RawMotion, Error<I::Error>> {
        let data = self.read_array::<{ RawMotion::SIZE }>(ACCEL_XOUT_H)?;
        Ok(RawMotion::from_bytes(&data))
    }

    /// Triggers a full device reset, all registers go back to their power on values (which
    /// includes sleep mode). The caller is responsible for waiting until the chip is back.
    ///
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        log::debug!("Resetting device");
        self.write_bit(PWR_MGMT_1, PWR1_DEVICE_RESET_BIT, true)
    }

    pub fn get_sleep_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(PWR_MGMT_1, PWR1_SLEEP_BIT)
    }

    pub fn set_sleep_enabled(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(PWR_MGMT_1, PWR1_SLEEP_BIT, enabled)
    }

    /// Returns `None` when the reserved clock source value is configured.
    ///
    pub fn get_clock_source(&mut self) -> Result<Option<ClockSource>, Error<I::Error>> {
        let value = self.read_bits(PWR_MGMT_1, PWR1_CLKSEL_BIT, PWR1_CLKSEL_LENGTH)?;
        Ok(ClockSource::from_field(value))
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<I::Error>> {
        log::info!("Setting clock source={:?}", source);
        self.write_bits(PWR_MGMT_1, PWR1_CLKSEL_BIT, PWR1_CLKSEL_LENGTH, source as u8)
    }

    pub fn get_sample_rate_divider(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_byte(SMPLRT_DIV)
    }

    /// Sets the sample rate based on the divider using the following formula:
    /// `1khz / (1 + divider) = sample_rate` (with the DLPF enabled).
    ///
    /// For example: `1khz / (1 + 4) = 200 Hz`
    ///
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(SMPLRT_DIV, divider)
    }

    pub fn get_external_frame_sync(&mut self) -> Result<ExtSync, Error<I::Error>> {
        let value = self.read_bits(CONFIG, CFG_EXT_SYNC_SET_BIT, CFG_EXT_SYNC_SET_LENGTH)?;
        Ok(ExtSync::from_field(value))
    }

    pub fn set_external_frame_sync(&mut self, sync: ExtSync) -> Result<(), Error<I::Error>> {
        self.write_bits(CONFIG, CFG_EXT_SYNC_SET_BIT, CFG_EXT_SYNC_SET_LENGTH, sync as u8)
    }

    pub fn get_dlpf_mode(&mut self) -> Result<Option<DLPFMode>, Error<I::Error>> {
        let value = self.read_bits(CONFIG, CFG_DLPF_CFG_BIT, CFG_DLPF_CFG_LENGTH)?;
        Ok(DLPFMode::from_field(value))
    }

    /// Set digital low-pass filter configuration
    ///
    pub fn set_dlpf_mode(&mut self, mode: DLPFMode) -> Result<(), Error<I::Error>> {
        self.write_bits(CONFIG, CFG_DLPF_CFG_BIT, CFG_DLPF_CFG_LENGTH, mode as u8)
    }

    pub fn get_gyro_scale(&mut self) -> Result<GyroScaleRange, Error<I::Error>> {
        let value = self.read_bits(GYRO_CONFIG, GCONFIG_FS_SEL_BIT, GCONFIG_FS_SEL_LENGTH)?;
        Ok(GyroScaleRange::from_field(value))
    }

    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), Error<I::Error>> {
        self.write_bits(GYRO_CONFIG, GCONFIG_FS_SEL_BIT, GCONFIG_FS_SEL_LENGTH, scale as u8)
    }

    pub fn get_accel_scale(&mut self) -> Result<AccelScaleRange, Error<I::Error>> {
        let value = self.read_bits(ACCEL_CONFIG, ACONFIG_AFS_SEL_BIT, ACONFIG_AFS_SEL_LENGTH)?;
        Ok(AccelScaleRange::from_field(value))
    }

    pub fn set_accel_scale(&mut self, scale: AccelScaleRange) -> Result<(), Error<I::Error>> {
        self.write_bits(ACCEL_CONFIG, ACONFIG_AFS_SEL_BIT, ACONFIG_AFS_SEL_LENGTH, scale as u8)
    }

    pub fn get_int_enabled(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_byte(INT_ENABLE)
    }

    /// Writes the full `INT_ENABLE` mask, see the `INTERRUPT_*_BIT` constants.
    ///
    pub fn set_int_enabled(&mut self, mask: u8) -> Result<(), Error<I::Error>> {
        log::debug!("Setting interrupt enable mask={:#010b}", mask);
        self.write_byte(INT_ENABLE, mask)
    }

    /// Reads `INT_STATUS`, which also clears the interrupt flags on the chip.
    ///
    pub fn get_int_status(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_byte(INT_STATUS)
    }

    pub fn get_fifo_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(USER_CTRL, USERCTRL_FIFO_EN_BIT)
    }

    pub fn set_fifo_enabled(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(USER_CTRL, USERCTRL_FIFO_EN_BIT, enabled)
    }

    /// Resets the FIFO buffer, the bit clears itself once the reset is done.
    ///
    pub fn reset_fifo(&mut self) -> Result<(), Error<I::Error>> {
        self.write_bit(USER_CTRL, USERCTRL_FIFO_RESET_BIT, true)
    }

    /// Gets the number of bytes currently available inside FIFO buffer.
    ///
    pub fn get_fifo_count(&mut self) -> Result<u16, Error<I::Error>> {
        self.read_word(FIFO_COUNT_H)
    }

    pub fn read_fifo(&mut self, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.read_bytes(FIFO_R_W, buffer)
    }

    /// Reads and discards `count` bytes from the FIFO.
    ///
    pub fn drain_fifo(&mut self, count: u16) -> Result<(), Error<I::Error>> {
        let mut buffer = [0u8; FIFO_DRAIN_CHUNK];
        let mut remaining = count as usize;
        while remaining > 0 {
            let chunk = usize::min(remaining, FIFO_DRAIN_CHUNK);
            self.read_fifo(&mut buffer[..chunk])?;
            remaining -= chunk;
        }
        Ok(())
    }

    /// Check if the DMP (Digital Motion Processor) is enabled.
    ///
    pub fn get_dmp_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(USER_CTRL, USERCTRL_DMP_EN_BIT)
    }

    /// Enable or disable the DMP (Digital Motion Processor).
    ///
    pub fn set_dmp_enabled(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        log::debug!("Setting DMP enabled={}", enabled);
        self.write_bit(USER_CTRL, USERCTRL_DMP_EN_BIT, enabled)
    }

    pub fn reset_dmp(&mut self) -> Result<(), Error<I::Error>> {
        log::debug!("Reset DMP");
        self.write_bit(USER_CTRL, USERCTRL_DMP_RESET_BIT, true)
    }

    pub fn get_dmp_config_1(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_byte(DMP_CFG_1)
    }

    pub fn set_dmp_config_1(&mut self, config: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(DMP_CFG_1, config)
    }

    pub fn get_dmp_config_2(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_byte(DMP_CFG_2)
    }

    pub fn set_dmp_config_2(&mut self, config: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(DMP_CFG_2, config)
    }

    pub fn get_otp_bank_valid(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(XG_OFFS_TC, TC_OTP_BNK_VLD_BIT)
    }

    pub fn set_otp_bank_valid(&mut self, valid: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(XG_OFFS_TC, TC_OTP_BNK_VLD_BIT, valid)
    }

    /// Reads the factory gyro offset temperature compensation trims of the X, Y and Z axis.
    ///
    pub fn get_gyro_offset_tcs(&mut self) -> Result<[u8; 3], Error<I::Error>> {
        let mut trims = [0u8; 3];
        for (axis, register) in [XG_OFFS_TC, YG_OFFS_TC, ZG_OFFS_TC].into_iter().enumerate() {
            trims[axis] = self.read_bits(register, TC_OFFSET_BIT, TC_OFFSET_LENGTH)?;
        }
        Ok(trims)
    }

    pub fn set_gyro_offset_tcs(&mut self, trims: [u8; 3]) -> Result<(), Error<I::Error>> {
        for (register, trim) in [XG_OFFS_TC, YG_OFFS_TC, ZG_OFFS_TC].into_iter().zip(trims) {
            self.write_bits(register, TC_OFFSET_BIT, TC_OFFSET_LENGTH, trim)?;
        }
        Ok(())
    }

    /// User gyro offsets `XG_OFFS_USR` up to `ZG_OFFS_USR`.
    ///
    pub fn get_gyro_offsets(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        let data = self.read_array::<6>(XG_OFFS_USRH)?;
        Ok(words_from_bytes(&data))
    }

    pub fn set_gyro_offsets(&mut self, offsets: [i16; 3]) -> Result<(), Error<I::Error>> {
        self.write_bytes(XG_OFFS_USRH, &words_to_bytes(offsets))
    }

    /// Accelerometer offsets `XA_OFFS` up to `ZA_OFFS`, note that bit 0 of each offset is
    /// reserved for the temperature compensation and should be preserved by the caller.
    ///
    pub fn get_accel_offsets(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        let data = self.read_array::<6>(XA_OFFS_H)?;
        Ok(words_from_bytes(&data))
    }

    pub fn set_accel_offsets(&mut self, offsets: [i16; 3]) -> Result<(), Error<I::Error>> {
        self.write_bytes(XA_OFFS_H, &words_to_bytes(offsets))
    }

    pub fn get_slave_address(&mut self, slave: I2cSlave) -> Result<u8, Error<I::Error>> {
        self.read_byte(slave.address_register())
    }

    /// Sets the i2c address at which the MPU6050 should expect to find the given slave (bit 7
    /// is the read flag).
    ///
    pub fn set_slave_address(&mut self, slave: I2cSlave, address: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(slave.address_register(), address)
    }

    pub fn get_slave_register(&mut self, slave: I2cSlave) -> Result<u8, Error<I::Error>> {
        self.read_byte(slave.data_register())
    }

    pub fn set_slave_register(&mut self, slave: I2cSlave, register: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(slave.data_register(), register)
    }

    pub fn get_slave_enabled(&mut self, slave: I2cSlave) -> Result<bool, Error<I::Error>> {
        self.read_bit(slave.control_register(), I2C_SLV_EN_BIT)
    }

    pub fn set_slave_enabled(&mut self, slave: I2cSlave, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(slave.control_register(), I2C_SLV_EN_BIT, enabled)
    }

    /// Number of bytes (0 to 15) the master reads from or writes to the slave per sample.
    ///
    pub fn get_slave_data_length(&mut self, slave: I2cSlave) -> Result<u8, Error<I::Error>> {
        self.read_bits(slave.control_register(), I2C_SLV_LEN_BIT, I2C_SLV_LEN_LENGTH)
    }

    pub fn set_slave_data_length(&mut self, slave: I2cSlave, length: u8) -> Result<(), Error<I::Error>> {
        self.write_bits(slave.control_register(), I2C_SLV_LEN_BIT, I2C_SLV_LEN_LENGTH, length)
    }

    /// Divider selecting the auxiliary I2C master clock, 13 is 400 kHz.
    ///
    pub fn get_i2c_master_clock(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_bits(I2C_MST_CTRL, I2C_MST_CLK_BIT, I2C_MST_CLK_LENGTH)
    }

    pub fn set_i2c_master_clock(&mut self, divider: u8) -> Result<(), Error<I::Error>> {
        self.write_bits(I2C_MST_CTRL, I2C_MST_CLK_BIT, I2C_MST_CLK_LENGTH, divider)
    }

    /// When enabled the auxiliary bus is connected straight to the main bus, so a host can talk
    /// to the aux sensors directly. Only works with the I2C master disabled.
    ///
    pub fn get_i2c_bypass_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(INT_PIN_CFG, INTCFG_I2C_BYPASS_EN_BIT)
    }

    pub fn set_i2c_bypass_enabled(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(INT_PIN_CFG, INTCFG_I2C_BYPASS_EN_BIT, enabled)
    }

    pub fn get_interrupt_active_low(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(INT_PIN_CFG, INTCFG_INT_LEVEL_BIT)
    }

    pub fn set_interrupt_active_low(&mut self, active_low: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(INT_PIN_CFG, INTCFG_INT_LEVEL_BIT, active_low)
    }

    pub fn set_interrupt_open_drain(&mut self, open_drain: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(INT_PIN_CFG, INTCFG_INT_OPEN_BIT, open_drain)
    }

    /// Keeps the INT pin asserted until the interrupt is cleared instead of a 50us pulse.
    ///
    pub fn get_interrupt_latch_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(INT_PIN_CFG, INTCFG_LATCH_INT_EN_BIT)
    }

    pub fn set_interrupt_latch_enabled(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(INT_PIN_CFG, INTCFG_LATCH_INT_EN_BIT, enabled)
    }

    /// With this set any read clears the interrupt status, otherwise only reading `INT_STATUS`.
    ///
    pub fn set_interrupt_clear_on_any_read(&mut self, enabled: bool) -> Result<(), Error<I::Error>> {
        self.write_bit(INT_PIN_CFG, INTCFG_INT_RD_CLEAR_BIT, enabled)
    }

    pub fn get_i2c_master_mode(&mut self) -> Result<bool, Error<I::Error>> {
        self.read_bit(USER_CTRL, USERCTRL_I2C_MST_EN_BIT)
    }

    pub fn set_i2c_master_mode(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        log::info!("Setting I2C master mode enabled={}", enable);
        self.write_bit(USER_CTRL, USERCTRL_I2C_MST_EN_BIT, enable)
    }

    pub fn reset_i2c_master(&mut self) -> Result<(), Error<I::Error>> {
        log::info!("Resetting I2C master");
        self.write_bit(USER_CTRL, USERCTRL_I2C_MST_RESET_BIT, true)
    }

    pub fn set_motion_threshold(&mut self, threshold: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(MOT_THR, threshold)
    }

    pub fn set_motion_duration(&mut self, duration: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(MOT_DUR, duration)
    }

    pub fn set_zero_motion_threshold(&mut self, threshold: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(ZERO_MOT_THR, threshold)
    }

    pub fn set_zero_motion_duration(&mut self, duration: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(ZERO_MOT_DUR, duration)
    }

    pub fn set_free_fall_threshold(&mut self, threshold: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(FF_THR, threshold)
    }

    pub fn set_free_fall_duration(&mut self, duration: u8) -> Result<(), Error<I::Error>> {
        self.write_byte(FF_DUR, duration)
    }
}

fn words_from_bytes(data: &[u8; 6]) -> [i16; 3] {
    [
        i16::from_be_bytes([data[0], data[1]]),
        i16::from_be_bytes([data[2], data[3]]),
        i16::from_be_bytes([data[4], data[5]]),
    ]
}

fn words_to_bytes(words: [i16; 3]) -> [u8; 6] {
    let mut data = [0u8; 6];
    for (i, word) in words.iter().enumerate() {
        data[i * 2..i * 2 + 2].copy_from_slice(&word.to_be_bytes());
    }
    data
}
