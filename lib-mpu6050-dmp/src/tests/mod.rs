mod bringup;
mod memory;
mod register_access;

use crate::sim::{SimDelay, SimDevice};
use crate::Mpu6050;

type SimMpu<'a> = Mpu6050<&'a mut SimDevice, &'a mut SimDelay>;

/// Driver talking to `sim`, with test logging enabled.
fn connect<'a>(sim: &'a mut SimDevice, delay: &'a mut SimDelay) -> SimMpu<'a> {
    let _ = env_logger::builder().is_test(true).try_init();
    Mpu6050::new(sim, delay)
}

/// Deterministic test pattern that differs from the zeroed simulator memory.
fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed) | 1).collect()
}
