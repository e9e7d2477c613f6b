use crate::registers::*;
use crate::sim::{Event, SimDelay, SimDevice};
use crate::{Error, MemoryCursor};

use super::{connect, pattern};

#[test]
fn test_block_round_trip() {
    let sizes = [1usize, 15, 16, 17, 100, 255, 256, 257, 600];
    let addresses = [0u8, 1, 15, 16, 200, 250, 255];

    for (i, &size) in sizes.iter().enumerate() {
        for &address in addresses.iter() {
            for verify in [false, true] {
                let data = pattern(size, i as u8);
                let bank = 2;
                let mut sim = SimDevice::new();
                let mut delay = SimDelay::default();
                let mut mpu = connect(&mut sim, &mut delay);

                let end = mpu.write_memory_block(bank, address, &data, verify).unwrap();
                let linear = address as usize + size;
                assert_eq!(end, MemoryCursor { bank: bank + (linear / 256) as u8, address: (linear % 256) as u8 });

                let mut read_back = vec![0u8; size];
                let read_end = mpu.read_memory_block(bank, address, &mut read_back).unwrap();
                assert_eq!(read_back, data);
                assert_eq!(read_end, end);

                assert_eq!(sim.memory(bank, address, size), &data[..]);
                for event in sim.events() {
                    match event {
                        Event::MemoryWrite { address, data, .. } => {
                            assert!(data.len() <= DMP_MEMORY_CHUNK_SIZE);
                            assert!(*address as usize + data.len() <= DMP_MEMORY_BANK_SIZE);
                        }
                        Event::MemoryRead { address, len, .. } => {
                            assert!(*len <= DMP_MEMORY_CHUNK_SIZE);
                            assert!(*address as usize + len <= DMP_MEMORY_BANK_SIZE);
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

#[test]
fn test_bank_wrap_selects_next_bank_once() {
    let data = pattern(300, 7);
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let end = mpu.write_memory_block(3, 250, &data, false).unwrap();
    assert_eq!(end, MemoryCursor { bank: 5, address: 38 });

    // 6 bytes in bank 3, 256 in bank 4 and the last 38 in bank 5.
    assert_eq!(sim.bank_selects(), vec![3, 4, 5]);
    let writes = sim.memory_writes();
    assert_eq!(writes[0], (3, 250, 6));
    assert_eq!(writes[1], (4, 0, 16));
    assert_eq!(*writes.last().unwrap(), (5, 32, 6));
    assert_eq!(writes.iter().map(|w| w.2).sum::<usize>(), 300);
}

#[test]
fn test_block_ending_on_bank_boundary_does_not_select_next_bank() {
    let data = pattern(32, 1);
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let end = mpu.write_memory_block(1, 224, &data, false).unwrap();
    assert_eq!(end, MemoryCursor { bank: 2, address: 0 });
    assert_eq!(sim.bank_selects(), vec![1]);
}

#[test]
fn test_verify_mismatch_stops_the_transfer() {
    let data = pattern(64, 3);
    let mut sim = SimDevice::new().corrupt_memory_read(2);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let result = mpu.write_memory_block(0, 0, &data, true);
    assert_eq!(
        result,
        Err(Error::VerificationMismatch { bank: 0, address: 16, expected: data[16], found: !data[16] })
    );

    // The chunk that failed verification was written, nothing after it.
    assert_eq!(sim.memory_writes(), vec![(0, 0, 16), (0, 16, 16)]);
    assert_eq!(sim.memory(0, 0, 32), &data[..32]);
    assert!(sim.memory(0, 32, 32).iter().all(|&b| b == 0));
}

#[test]
fn test_verify_reselects_the_bank() {
    let data = pattern(20, 9);
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.write_memory_block(4, 0, &data, true).unwrap();
    // Initial select plus one per verified chunk.
    assert_eq!(sim.bank_selects(), vec![4, 4, 4]);
}

#[test]
fn test_bank_handle_needs_a_start_address() {
    let mut sim = SimDevice::new();
    sim.set_register(DMP_MEM_START_ADDR, 0xFE);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    {
        let mut memory = mpu.select_bank(2, false, false).unwrap();
        assert_eq!(memory.address(), None);
        assert_eq!(memory.write(&[1, 2, 3, 4]), Err(Error::StartAddressUnset));
        assert_eq!(memory.read_byte(), Err(Error::StartAddressUnset));

        memory.set_start_address(0x10).unwrap();
        memory.write(&[1, 2, 3, 4]).unwrap();
        assert_eq!(memory.address(), Some(0x14));
    }

    assert_eq!(sim.memory_writes(), vec![(2, 0x10, 4)]);
    assert!(!sim.events().iter().any(|e| matches!(e, Event::MemoryRead { .. })));
}

#[test]
fn test_bank_handle() {
    let mut sim = SimDevice::new();
    sim.set_memory(6, 0xF0, &[0xDE, 0xAD]);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    {
        let mut memory = mpu.select_bank(6, false, false).unwrap();
        assert_eq!(memory.bank(), 6);
        memory.set_start_address(0xF0).unwrap();
        assert_eq!(memory.read_byte().unwrap(), 0xDE);
        assert_eq!(memory.read_byte().unwrap(), 0xAD);
        assert_eq!(memory.address(), Some(0xF2));

        memory.set_start_address(0xFC).unwrap();
        memory.write(&[1, 2, 3, 4]).unwrap();
        assert_eq!(memory.address(), Some(0x00));

        memory.set_start_address(0xFE).unwrap();
        assert_eq!(
            memory.write(&[1, 2, 3]),
            Err(Error::BankBoundary { address: 0xFE, length: 3 })
        );
    }

    assert_eq!(sim.memory(6, 0xFC, 4), &[1, 2, 3, 4]);
    assert_eq!(sim.bank_selects(), vec![6]);
}

#[test]
fn test_bank_select_flags() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    mpu.select_bank(0x10, true, true).unwrap();
    mpu.select_bank(0x25, false, false).unwrap();
    assert_eq!(sim.bank_selects(), vec![0x70, 0x05]);
}

#[test]
fn test_bank_overflow() {
    let data = pattern(20, 0);
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    assert_eq!(mpu.write_memory_block(31, 250, &data, false), Err(Error::BankOverflow));
    assert_eq!(mpu.write_memory_block(32, 0, &data, false), Err(Error::BankOverflow));

    // Only the part that fits in bank 31 made it to the chip.
    assert_eq!(sim.memory_writes(), vec![(31, 250, 6)]);
}

#[test]
fn test_empty_block() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let end = mpu.write_memory_block(1, 10, &[], true).unwrap();
    assert_eq!(end, MemoryCursor { bank: 1, address: 10 });
    assert!(sim.memory_writes().is_empty());
}
