/// One burst of raw sensor registers, `ACCEL_XOUT_H` up to and including `GYRO_ZOUT_L`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawMotion {
    pub accel: [i16; 3],
    pub temp: i16,
    pub gyro: [i16; 3],
}

impl RawMotion {
    pub const SIZE: usize = 14;

    pub fn from_bytes(data: &[u8; Self::SIZE]) -> Self {
        let word = |i: usize| i16::from_be_bytes([data[i], data[i + 1]]);
        RawMotion {
            accel: [word(0), word(2), word(4)],
            temp: word(6),
            gyro: [word(8), word(10), word(12)],
        }
    }

    /// Temperature of the on chip sensor in degrees celsius.
    /// Formula from page 30 of the register map data sheet.
    ///
    pub fn temperature(&self) -> f32 {
        (self.temp as f32) / 340.0 + 36.53
    }
}
