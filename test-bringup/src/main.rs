use std::{env, process, thread, time::Duration};

use embedded_hal::delay::DelayNs;
use mpu6050::sim::SimDevice;
use mpu6050::{BringupConfig, Mpu6050};

/// Delay provider backed by the host's sleep.
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns as u64));
    }
}

fn scenario(name: &str) -> Option<SimDevice> {
    let device = SimDevice::new();
    match name {
        "ok" => Some(device),
        "nack-firmware" => Some(device.nack_memory_read(4)),
        "corrupt-config" => Some(device.corrupt_memory_read(123)),
        "fifo-stall" => Some(device.with_fifo_growth(0)),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let name = args.get(1).map(String::as_str).unwrap_or("ok");
    let Some(device) = scenario(name) else {
        eprintln!("Unknown scenario '{}', expected one of: ok, nack-firmware, corrupt-config, fifo-stall", name);
        process::exit(64);
    };

    let mut config = BringupConfig::default();
    if let Some(limit) = args.get(2) {
        match limit.parse() {
            Ok(limit) => config.fifo_poll_limit = limit,
            Err(_) => {
                eprintln!("FIFO poll limit must be a number, got '{}'", limit);
                process::exit(64);
            }
        }
    }

    let mut mpu = Mpu6050::new(device, StdDelay);
    match mpu.dmp_initialize(&config) {
        Ok(report) => {
            log::info!("Bring-up finished: {:?}", report);
            log::info!("Driver state: {:?}", mpu.bringup_state());
        }
        Err(err) => {
            log::error!("Driver state: {:?}", mpu.bringup_state());
            process::exit(err.code() as i32);
        }
    }
}
