/// Sensor output whose least significant bit latches the `FSYNC` pin, stored in
/// `CONFIG.EXT_SYNC_SET`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtSync {
    #[default]
    Disabled = 0,
    TempOutL = 1,
    GyroXOutL = 2,
    GyroYOutL = 3,
    GyroZOutL = 4,
    AccelXOutL = 5,
    AccelYOutL = 6,
    AccelZOutL = 7,
}

impl ExtSync {
    pub fn from_field(value: u8) -> Self {
        match value & 0b111 {
            0 => Self::Disabled,
            1 => Self::TempOutL,
            2 => Self::GyroXOutL,
            3 => Self::GyroYOutL,
            4 => Self::GyroZOutL,
            5 => Self::AccelXOutL,
            6 => Self::AccelYOutL,
            _ => Self::AccelZOutL,
        }
    }
}
