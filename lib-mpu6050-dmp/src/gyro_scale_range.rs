/// Full scale range of the gyroscope, configured through `GYRO_CONFIG.FS_SEL`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroScaleRange {
    /// ±250 °/s
    #[default]
    D250 = 0,
    /// ±500 °/s
    D500 = 1,
    /// ±1000 °/s
    D1000 = 2,
    /// ±2000 °/s, used by the DMP firmware.
    D2000 = 3,
}

impl GyroScaleRange {
    /// Converts the right aligned `FS_SEL` field value back into a scale range, only the two
    /// lowest bits are looked at.
    ///
    pub fn from_field(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::D250,
            1 => Self::D500,
            2 => Self::D1000,
            _ => Self::D2000,
        }
    }

    /// Gets the sensitivity scale factor for the given scale range in LSB / (deg/s), multiplied
    /// by 10 to keep it integer.
    ///
    pub fn sensitivity_x10(&self) -> u16 {
        match self {
            Self::D250 => 1310,
            Self::D500 => 655,
            Self::D1000 => 328,
            Self::D2000 => 164,
        }
    }
}
