use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::memory::MemoryCursor;
use crate::{BringupConfig, Error, I2cSlave, Mpu6050};

use super::{ConfigRecords, DMP_CONFIG, DMP_FIRMWARE, DMP_UPDATES};

/// Undocumented location of the hardware revision byte: user bank 0x10, address 6.
const REVISION_BANK: u8 = 0x10;
const REVISION_ADDRESS: u8 = 0x06;

/// Slave 0 addresses the auxiliary I2C master is pointed at during the bring-up, there is no
/// actual slave device connected.
const AUX_PARK_ADDRESS: u8 = 0x7F;
const AUX_SELF_ADDRESS: u8 = 0x68;

/// Steps of the DMP bring-up, in the order they run.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BringupStage {
    Reset,
    WakeUp,
    RevisionProbe,
    TrimCapture,
    AuxBus,
    FirmwareLoad,
    ConfigSet,
    RegisterSetup,
    MemoryUpdates,
    Finalize,
}

impl BringupStage {
    /// Failure code of the stage. Firmware (1) and config (2) match what the i2cdevlib based
    /// drivers report, the other stages got codes of their own.
    ///
    pub fn code(&self) -> u8 {
        match self {
            Self::FirmwareLoad => 1,
            Self::ConfigSet => 2,
            Self::Reset => 3,
            Self::WakeUp => 4,
            Self::RevisionProbe => 5,
            Self::TrimCapture => 6,
            Self::AuxBus => 7,
            Self::RegisterSetup => 8,
            Self::MemoryUpdates => 9,
            Self::Finalize => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BringupState {
    #[default]
    Idle,
    Running(BringupStage),
    Ready,
    Failed { stage: BringupStage, code: u8 },
}

/// A failed bring-up: the stage that failed and why.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BringupError<E> {
    pub stage: BringupStage,
    pub cause: Error<E>,
}

impl<E> BringupError<E> {
    pub fn code(&self) -> u8 {
        self.stage.code()
    }
}

impl<E: fmt::Debug> fmt::Display for BringupError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DMP bring-up failed in stage {:?} (code {}): {}", self.stage, self.code(), self.cause)
    }
}

impl<E: fmt::Debug> core::error::Error for BringupError<E> {}

/// What the bring-up learned about the chip along the way.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BringupReport {
    /// `None` when the byte could not be read, that does not stop the bring-up.
    pub revision: Option<u8>,
    pub otp_bank_valid: Option<bool>,
    /// X, Y and Z gyro offset TC trims as found before the firmware was loaded.
    pub gyro_offset_tcs: [u8; 3],
    /// Memory position right after the firmware image.
    pub firmware_end: MemoryCursor,
    pub config_bytes: usize,
    /// FIFO counts drained after the first FIFO reset and during the two DMP output waits.
    pub fifo_counts: [u16; 3],
    /// `INT_STATUS` read after each of the two DMP output waits.
    pub int_status: [u8; 2],
}

impl<I: I2c, D: DelayNs> Mpu6050<I, D> {
    /// Initializes the DMP (Digital Motion Processor) so data can be read from the FIFO queue,
    /// this needs to be called each time the sensor boots up.
    ///
    /// Because the DMP part of the chip seems to be mostly undocumented this method is essentially
    /// based completely on the `MPU6050_6Axis_MotionApps20::dmpInitialize()` function in Jeff
    /// Rowberg's `i2cdevlib` C++ library. The first error aborts the sequence, calling this
    /// again starts over from the device reset. The DMP is left disabled.
    ///
    pub fn dmp_initialize(&mut self, config: &BringupConfig) -> Result<BringupReport, BringupError<I::Error>> {
        let result = self.run_bringup(config);
        self.bringup_state = match &result {
            Ok(_) => BringupState::Ready,
            Err(err) => {
                log::error!("{}", err);
                BringupState::Failed { stage: err.stage, code: err.code() }
            }
        };
        result
    }

    fn run_bringup(&mut self, config: &BringupConfig) -> Result<BringupReport, BringupError<I::Error>> {
        let mut report = BringupReport::default();

        self.stage(BringupStage::Reset, |mpu| {
            mpu.reset()?;
            mpu.delay_ms(config.reset_settle_ms);
            Ok(())
        })?;

        self.stage(BringupStage::WakeUp, |mpu| mpu.set_sleep_enabled(false))?;

        (report.revision, report.otp_bank_valid) = self.stage(BringupStage::RevisionProbe, |mpu| mpu.read_revision_info())?;

        report.gyro_offset_tcs = self.stage(BringupStage::TrimCapture, |mpu| {
            let trims = mpu.get_gyro_offset_tcs()?;
            log::info!("Gyro offset TCs: x={} y={} z={}", trims[0], trims[1], trims[2]);
            Ok(trims)
        })?;

        self.stage(BringupStage::AuxBus, |mpu| {
            mpu.set_slave_address(I2cSlave::Slave0, AUX_PARK_ADDRESS)?;
            mpu.set_i2c_master_mode(false)?;
            mpu.set_slave_address(I2cSlave::Slave0, AUX_SELF_ADDRESS)?;
            mpu.reset_i2c_master()?;
            mpu.delay_ms(config.aux_reset_settle_ms);
            Ok(())
        })?;

        report.firmware_end = self.stage(BringupStage::FirmwareLoad, |mpu| mpu.load_firmware(&DMP_FIRMWARE))?;

        report.config_bytes = self.stage(BringupStage::ConfigSet, |mpu| {
            mpu.apply_config_set_with(&DMP_CONFIG, config.special_int_enable)
        })?;

        let trims = report.gyro_offset_tcs;
        self.stage(BringupStage::RegisterSetup, |mpu| {
            mpu.set_clock_source(config.clock_source)?;
            log::info!("Setting interrupt enable mask={:#04x}", config.int_enable);
            mpu.set_int_enabled(config.int_enable)?;
            mpu.set_sample_rate_divider(config.sample_rate_divider)?;
            mpu.set_external_frame_sync(config.ext_sync)?;
            mpu.set_dlpf_mode(config.dlpf_mode)?;
            mpu.set_gyro_scale(config.gyro_scale)?;
            mpu.set_dmp_config_1(config.dmp_config[0])?;
            mpu.set_dmp_config_2(config.dmp_config[1])?;
            mpu.set_otp_bank_valid(false)?;
            mpu.set_gyro_offset_tcs(trims)
        })?;

        self.stage(BringupStage::MemoryUpdates, |mpu| {
            let mut updates = ConfigRecords::new(&DMP_UPDATES);
            let special_int_enable = config.special_int_enable;

            mpu.apply_next_update(&mut updates, special_int_enable)?;
            mpu.apply_next_update(&mut updates, special_int_enable)?;

            mpu.reset_fifo()?;
            let count = mpu.get_fifo_count()?;
            log::info!("Current FIFO count={}", count);
            mpu.drain_fifo(count)?;
            report.fifo_counts[0] = count;

            mpu.set_motion_threshold(config.motion_threshold)?;
            mpu.set_zero_motion_threshold(config.zero_motion_threshold)?;
            mpu.set_motion_duration(config.motion_duration)?;
            mpu.set_zero_motion_duration(config.zero_motion_duration)?;

            mpu.reset_fifo()?;
            mpu.set_fifo_enabled(true)?;
            mpu.set_dmp_enabled(true)?;
            mpu.reset_dmp()?;

            for _ in 0..3 {
                mpu.apply_next_update(&mut updates, special_int_enable)?;
            }
            (report.fifo_counts[1], report.int_status[0]) = mpu.collect_dmp_output(config)?;

            mpu.apply_next_update(&mut updates, special_int_enable)?;
            (report.fifo_counts[2], report.int_status[1]) = mpu.collect_dmp_output(config)?;

            mpu.apply_next_update(&mut updates, special_int_enable)
        })?;

        self.stage(BringupStage::Finalize, |mpu| {
            mpu.set_dmp_enabled(false)?;
            mpu.reset_fifo()?;
            mpu.get_int_status()?;
            Ok(())
        })?;

        log::info!("Finished setting up DMP");
        Ok(report)
    }

    /// Runs one stage of the bring-up, tagging any error with the stage.
    ///
    fn stage<T>(
        &mut self,
        stage: BringupStage,
        run: impl FnOnce(&mut Self) -> Result<T, Error<I::Error>>,
    ) -> Result<T, BringupError<I::Error>> {
        log::info!("DMP bring-up stage {:?}", stage);
        self.bringup_state = BringupState::Running(stage);
        run(self).map_err(|cause| BringupError { stage, cause })
    }

    /// Reads the hardware revision and OTP bank valid flag for the log. Failing to read either is
    /// only a warning, but bank 0 has to be selected again afterwards.
    ///
    fn read_revision_info(&mut self) -> Result<(Option<u8>, Option<bool>), Error<I::Error>> {
        let revision = match self.get_hardware_revision() {
            Ok(revision) => {
                log::info!("Hardware revision: {:#04x}", revision);
                Some(revision)
            }
            Err(err) => {
                log::warn!("Could not read hardware revision: {}", err);
                self.select_bank(0, false, false)?;
                None
            }
        };
        let otp_bank_valid = match self.get_otp_bank_valid() {
            Ok(valid) => {
                log::info!("OTP bank valid: {}", valid);
                Some(valid)
            }
            Err(err) => {
                log::warn!("Could not read OTP bank valid flag: {}", err);
                None
            }
        };
        Ok((revision, otp_bank_valid))
    }

    fn apply_next_update(&mut self, updates: &mut ConfigRecords, special_int_enable: u8) -> Result<(), Error<I::Error>> {
        let offset = updates.consumed();
        match updates.next() {
            Some(record) => {
                let record = record.map_err(|err| err.into_error::<I::Error>())?;
                log::info!("Writing final memory update at byte {} of {}", offset, DMP_UPDATES.len());
                self.apply_record(&record, special_int_enable)
            }
            None => Err(Error::TruncatedRecord { offset }),
        }
    }

    /// Waits for the DMP to put something in the FIFO, throws it away and clears the interrupt
    /// flags. Returns the FIFO count and interrupt status.
    ///
    fn collect_dmp_output(&mut self, config: &BringupConfig) -> Result<(u16, u8), Error<I::Error>> {
        let count = self.wait_for_fifo_count(config.fifo_min_count, config.fifo_poll_limit, config.fifo_poll_interval_us)?;
        log::info!("Current FIFO count={}", count);
        self.drain_fifo(count)?;
        let status = self.get_int_status()?;
        log::info!("Current interrupt status={:#04x}", status);
        Ok((count, status))
    }

    /// Polls the FIFO count until it holds at least `min_count` bytes. Gives up with
    /// [`Error::FifoTimeout`] after `poll_limit` polls.
    ///
    pub fn wait_for_fifo_count(&mut self, min_count: u16, poll_limit: u32, interval_us: u32) -> Result<u16, Error<I::Error>> {
        let mut polls = 0;
        loop {
            let count = self.get_fifo_count()?;
            polls += 1;
            if count >= min_count {
                return Ok(count);
            }
            if polls >= poll_limit {
                log::warn!("FIFO holds {} bytes after {} polls, giving up", count, polls);
                return Err(Error::FifoTimeout { count, polls });
            }
            self.delay_us(interval_us);
        }
    }

    /// Get the MPU hardware revision, practically this reads a magical undocumented byte in the
    /// MPU's memory whose location was found in the `i2cdevlib` C++ library. Bank 0 is selected
    /// again afterwards.
    ///
    pub fn get_hardware_revision(&mut self) -> Result<u8, Error<I::Error>> {
        let revision = {
            let mut memory = self.select_bank(REVISION_BANK, true, true)?;
            memory.set_start_address(REVISION_ADDRESS)?;
            memory.read_byte()?
        };
        self.select_bank(0, false, false)?;
        Ok(revision)
    }
}
