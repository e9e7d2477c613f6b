#![cfg_attr(not(any(test, feature = "sim")), no_std)]

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod data;
pub use data::*;

pub mod i2c_slave;
pub use i2c_slave::*;

pub mod clock_source;
pub use clock_source::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod ext_sync;
pub use ext_sync::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod registers;

pub mod mpu6050;
pub use mpu6050::*;

mod control;

pub mod memory;
pub use memory::{MemoryBank, MemoryCursor};

pub mod utils;

pub mod dmp;
pub use dmp::{BringupError, BringupReport, BringupStage, BringupState};

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU 6050 chip (`AD0` low).
///
pub const MPU6050_DEFAULT_I2C_ADDR: u8 = 0x68;

/// i2c address of the MPU 6050 chip with `AD0` pulled high.
///
pub const MPU6050_ALT_I2C_ADDR: u8 = 0x69;

/// The default device ID of a MPU6050 chip.
///
pub const MPU6050_DEVICE_ID: u8 = 0x34;
