use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::{Error, Mpu6050};

/// Size of a FIFO packet produced by the MotionApps 2.0 firmware.
pub const DMP_PACKET_SIZE: usize = 42;

impl<I: I2c, D: DelayNs> Mpu6050<I, D> {
    /// Checks if there is currently at least one DMP packet worth of bytes in the FIFO queue.
    ///
    pub fn dmp_packet_available(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.get_fifo_count()? as usize >= DMP_PACKET_SIZE)
    }

    /// Gets a raw DMP packet from the FIFO buffer if one is available, otherwise `None` is
    /// returned. Decoding the packet is up to the caller.
    ///
    pub fn read_dmp_packet(&mut self) -> Result<Option<[u8; DMP_PACKET_SIZE]>, Error<I::Error>> {
        if !self.dmp_packet_available()? {
            return Ok(None);
        }
        let mut packet = [0u8; DMP_PACKET_SIZE];
        self.read_fifo(&mut packet)?;
        Ok(Some(packet))
    }
}
