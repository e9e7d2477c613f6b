/// Clock source of the chip, stored in `PWR_MGMT_1.CLKSEL`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockSource {
    #[default]
    InternalOscillator = 0,

    GyroX = 1,
    GyroY = 2,
    GyroZ = 3,

    External32kHz = 4,
    External19MHz = 5,

    // 6 is reserved.

    /// Stops the clock and keeps the timing generator in reset
    Stop = 7,
}

impl ClockSource {
    pub fn from_field(value: u8) -> Option<Self> {
        match value & 0b111 {
            0 => Some(Self::InternalOscillator),
            1 => Some(Self::GyroX),
            2 => Some(Self::GyroY),
            3 => Some(Self::GyroZ),
            4 => Some(Self::External32kHz),
            5 => Some(Self::External19MHz),
            7 => Some(Self::Stop),
            _ => None,
        }
    }
}
