/// DLPF (Digital Low Pass Filter) mode, this determines the highest frequency that is not filtered
/// out. Stored in `CONFIG.DLPF_CFG`.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DLPFMode {
    #[default]
    Bw256Hz = 0x00,
    Bw188Hz = 0x01,
    Bw98Hz = 0x02,
    Bw42Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

impl DLPFMode {
    /// Field value 7 is reserved, it is reported as `None`.
    ///
    pub fn from_field(value: u8) -> Option<Self> {
        match value & 0b111 {
            0 => Some(Self::Bw256Hz),
            1 => Some(Self::Bw188Hz),
            2 => Some(Self::Bw98Hz),
            3 => Some(Self::Bw42Hz),
            4 => Some(Self::Bw20Hz),
            5 => Some(Self::Bw10Hz),
            6 => Some(Self::Bw5Hz),
            _ => None,
        }
    }
}
