use crate::{ClockSource, DLPFMode, ExtSync, GyroScaleRange};

/// `INT_ENABLE` value written by the `0x01` special instruction of a DMP config stream: zero
/// motion, FIFO overflow and DMP interrupts.
pub const DEFAULT_SPECIAL_INT_ENABLE: u8 = 0x32;

/// Settings of the DMP bring-up sequence. The defaults are the values the MotionApps 2.0 firmware
/// expects, only change them when you know the firmware can cope.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BringupConfig {
    /// Time to wait after a device reset before talking to the chip again (ms).
    pub reset_settle_ms: u32,

    /// Time to wait after resetting the auxiliary I2C master (ms).
    pub aux_reset_settle_ms: u32,

    /// Number of times the FIFO count is polled while waiting for the DMP to produce output.
    pub fifo_poll_limit: u32,

    /// Pause between two FIFO count polls (µs).
    pub fifo_poll_interval_us: u32,

    /// Number of bytes the FIFO must hold before the wait is over.
    pub fifo_min_count: u16,

    pub clock_source: ClockSource,

    /// `INT_ENABLE` mask during the bring-up, DMP and FIFO overflow interrupts by default.
    pub int_enable: u8,

    /// `1khz / (1 + divider)`, 200 Hz by default.
    pub sample_rate_divider: u8,

    pub ext_sync: ExtSync,
    pub dlpf_mode: DLPFMode,
    pub gyro_scale: GyroScaleRange,

    /// Values of `DMP_CFG_1` and `DMP_CFG_2`.
    pub dmp_config: [u8; 2],

    pub motion_threshold: u8,
    pub zero_motion_threshold: u8,
    pub motion_duration: u8,
    pub zero_motion_duration: u8,

    /// `INT_ENABLE` value written by the special instruction in the config stream.
    pub special_int_enable: u8,
}

impl Default for BringupConfig {
    fn default() -> Self {
        BringupConfig {
            reset_settle_ms: 30,
            aux_reset_settle_ms: 20,
            fifo_poll_limit: 500,
            fifo_poll_interval_us: 1000,
            fifo_min_count: 3,
            clock_source: ClockSource::GyroZ,
            int_enable: 0x12,
            sample_rate_divider: 4,
            ext_sync: ExtSync::TempOutL,
            dlpf_mode: DLPFMode::Bw42Hz,
            gyro_scale: GyroScaleRange::D2000,
            dmp_config: [0x03, 0x00],
            motion_threshold: 2,
            zero_motion_threshold: 156,
            motion_duration: 80,
            zero_motion_duration: 0,
            special_int_enable: DEFAULT_SPECIAL_INT_ENABLE,
        }
    }
}
