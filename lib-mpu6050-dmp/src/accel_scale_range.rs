/// Full scale range of the accelerometer, configured through `ACCEL_CONFIG.AFS_SEL`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelScaleRange {
    #[default]
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelScaleRange {
    pub fn from_field(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::G2,
            1 => Self::G4,
            2 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Gets the sensitivity scale factor for the given scale range.
    /// (Note scale factor is in LSB/g).
    ///
    pub fn sensitivity(&self) -> u16 {
        match self {
            Self::G2 => 16384,
            Self::G4 => 8192,
            Self::G8 => 4096,
            Self::G16 => 2048,
        }
    }
}
