use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

use crate::registers::*;
use crate::sim::{Event, SimDelay, SimDevice};
use crate::{Error, Mpu6050};

use super::connect;

#[test]
fn test_write_bits_preserves_other_bits() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    for high_bit in 0..8u8 {
        for length in 1..=(high_bit + 1) {
            let mask = crate::utils::bit_mask(high_bit, length);
            for initial in [0x00u8, 0xFF, 0xA5, 0x5A] {
                for value in 0..(1u16 << length) {
                    let value = value as u8;
                    mpu.write_byte(SMPLRT_DIV, initial).unwrap();
                    mpu.write_bits(SMPLRT_DIV, high_bit, length, value).unwrap();
                    assert_eq!(mpu.read_bits(SMPLRT_DIV, high_bit, length).unwrap(), value);

                    let state = mpu.read_byte(SMPLRT_DIV).unwrap();
                    assert_eq!(state & !mask, initial & !mask, "field ({}, {})", high_bit, length);
                }
            }
        }
    }
}

#[test]
fn test_write_bits_documented_example() {
    let mut sim = SimDevice::new();
    sim.set_register(CONFIG, 0b1010_1111);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_bits(CONFIG, 4, 3, 0b010).unwrap();
    assert_eq!(mpu.read_byte(CONFIG).unwrap(), 0b1010_1011);
    assert_eq!(mpu.read_bits(CONFIG, 4, 3).unwrap(), 0b010);
}

#[test]
fn test_write_bits_drops_excess_value_bits() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_bits(CONFIG, 4, 3, 0xFF).unwrap();
    assert_eq!(mpu.read_byte(CONFIG).unwrap(), 0b0001_1100);
}

#[test]
fn test_single_bits() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_bit(USER_CTRL, USERCTRL_FIFO_EN_BIT, true).unwrap();
    assert!(mpu.read_bit(USER_CTRL, USERCTRL_FIFO_EN_BIT).unwrap());
    assert!(!mpu.read_bit(USER_CTRL, USERCTRL_DMP_EN_BIT).unwrap());
    mpu.write_bit(USER_CTRL, USERCTRL_FIFO_EN_BIT, false).unwrap();
    assert_eq!(mpu.read_byte(USER_CTRL).unwrap(), 0);
}

#[test]
fn test_invalid_bit_range_does_not_touch_bus() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    assert_eq!(
        mpu.read_bits(CONFIG, 8, 1),
        Err(Error::InvalidBitRange { high_bit: 8, length: 1 })
    );
    assert_eq!(
        mpu.write_bits(CONFIG, 2, 4, 0),
        Err(Error::InvalidBitRange { high_bit: 2, length: 4 })
    );
    assert_eq!(
        mpu.write_bits_word(XG_OFFS_USRH, 16, 1, 0),
        Err(Error::InvalidBitRange { high_bit: 16, length: 1 })
    );
    assert!(sim.events().is_empty());
}

#[test]
fn test_zero_length_field_is_a_no_op() {
    let mut sim = SimDevice::new();
    sim.set_register(CONFIG, 0x5A);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_bits(CONFIG, 5, 0, 0xFF).unwrap();
    assert_eq!(mpu.read_bits(CONFIG, 5, 0).unwrap(), 0);
    assert_eq!(mpu.read_byte(CONFIG).unwrap(), 0x5A);
}

#[test]
fn test_words() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_word(XG_OFFS_USRH, 0x1234).unwrap();
    assert_eq!(mpu.read_word(XG_OFFS_USRH).unwrap(), 0x1234);

    // Bits 12:8 of 0x1234 are 0b10010.
    assert_eq!(mpu.read_bits_word(XG_OFFS_USRH, 12, 5).unwrap(), 0b10010);
    mpu.write_bits_word(XG_OFFS_USRH, 11, 8, 0xAB).unwrap();
    assert_eq!(mpu.read_word(XG_OFFS_USRH).unwrap(), 0x1AB4);

    assert_eq!(sim.register(XG_OFFS_USRH), 0x1A);
    assert_eq!(sim.register(XG_OFFS_USRL), 0xB4);
}

#[test]
fn test_burst_write_is_a_single_transfer() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_bytes(XA_OFFS_H, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(mpu.read_array::<6>(XA_OFFS_H).unwrap(), [1, 2, 3, 4, 5, 6]);

    assert_eq!(
        sim.events()[0],
        Event::Write { register: XA_OFFS_H, data: vec![1, 2, 3, 4, 5, 6] }
    );
    assert_eq!(sim.events()[1], Event::Read { register: XA_OFFS_H, len: 6 });
    assert_eq!(sim.register(ZA_OFFS_L_TC), 6);
}

#[test]
fn test_bus_errors_surface() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = Mpu6050::with_address(&mut sim, &mut delay, crate::MPU6050_ALT_I2C_ADDR);

    let expected = Error::Bus(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    assert_eq!(mpu.read_byte(WHO_AM_I), Err(expected.clone()));
    assert_eq!(mpu.write_bits(CONFIG, 2, 3, 1), Err(expected));

    mpu.set_device_address(crate::MPU6050_DEFAULT_I2C_ADDR);
    assert_eq!(mpu.device_address(), 0x68);
    assert_eq!(mpu.read_byte(WHO_AM_I).unwrap(), 0x68);
}

#[test]
fn test_release_hands_back_the_bus() {
    let sim = SimDevice::new().with_address(0x69);
    let mpu = Mpu6050::with_address(sim, SimDelay::default(), 0x69);
    let (mut sim, _delay) = mpu.release();

    let mut delay = SimDelay::default();
    let mut mpu = Mpu6050::with_address(&mut sim, &mut delay, 0x69);
    assert!(mpu.test_connection().is_ok());
}
