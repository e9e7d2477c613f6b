use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

use crate::dmp::DMP_FIRMWARE;
use crate::registers::*;
use crate::sim::{SimDelay, SimDevice};
use crate::*;

use super::connect;

#[test]
fn test_bringup_succeeds() {
    let mut sim = SimDevice::new().with_revision(0x04);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);
    assert_eq!(mpu.bringup_state(), BringupState::Idle);

    let report = mpu.dmp_initialize(&BringupConfig::default()).unwrap();
    assert_eq!(mpu.bringup_state(), BringupState::Ready);

    assert_eq!(report.revision, Some(0x04));
    assert_eq!(report.otp_bank_valid, Some(true));
    assert_eq!(report.gyro_offset_tcs, [0x1A, 0x05, 0x3F]);
    assert_eq!(report.firmware_end, MemoryCursor { bank: 7, address: 137 });
    assert_eq!(report.config_bytes, 192);
    assert_eq!(report.fifo_counts, [0, 3, 3]);
    assert_eq!(report.int_status, [0x02, 0x02]);

    // Settle delays plus two FIFO polls that came up short in each of the two waits.
    assert_eq!(delay.elapsed_ns, 54_000_000);

    // Untouched start of the firmware, followed by the last memory update.
    assert_eq!(sim.memory(0, 0, 0x60), &DMP_FIRMWARE[..0x60]);
    assert_eq!(sim.memory(0, 0x60, 4), &[0x00, 0x40, 0x00, 0x00]);
}

#[test]
fn test_bringup_register_setup() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);
    mpu.dmp_initialize(&BringupConfig::default()).unwrap();

    assert_eq!(sim.register(PWR_MGMT_1), 0x03);
    assert_eq!(sim.register(SMPLRT_DIV), 4);
    assert_eq!(sim.register(CONFIG), 0x0B);
    assert_eq!(sim.register(GYRO_CONFIG), 0x18);
    assert_eq!(sim.register(DMP_CFG_1), 0x03);
    assert_eq!(sim.register(DMP_CFG_2), 0x00);
    assert_eq!(sim.register(MOT_THR), 2);
    assert_eq!(sim.register(ZERO_MOT_THR), 156);
    assert_eq!(sim.register(MOT_DUR), 80);
    assert_eq!(sim.register(ZERO_MOT_DUR), 0);
    assert_eq!(sim.register(I2C_SLV0_ADDR), 0x68);

    // The special instruction of the config stream comes first, the register setup overrides it.
    assert_eq!(sim.register_writes(INT_ENABLE), vec![0x32, 0x12]);
    assert_eq!(sim.register_writes(I2C_SLV0_ADDR), vec![0x7F, 0x68]);

    // DMP left disabled, FIFO still enabled and empty.
    let user_ctrl = sim.register(USER_CTRL);
    assert_eq!(user_ctrl & (1 << USERCTRL_DMP_EN_BIT), 0);
    assert_ne!(user_ctrl & (1 << USERCTRL_FIFO_EN_BIT), 0);
    assert_eq!(sim.fifo_len(), 0);
}

#[test]
fn test_bringup_restores_gyro_trims() {
    let mut sim = SimDevice::new().with_gyro_offset_tcs([0x21, 0x00, 0x3E]);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let report = mpu.dmp_initialize(&BringupConfig::default()).unwrap();
    assert_eq!(report.gyro_offset_tcs, [0x21, 0x00, 0x3E]);
    assert_eq!(mpu.get_gyro_offset_tcs().unwrap(), [0x21, 0x00, 0x3E]);
    assert!(!mpu.get_otp_bank_valid().unwrap());

    // Each trim was written back after the OTP bank flag was cleared.
    let writes = sim.register_writes(ZG_OFFS_TC);
    assert_eq!(writes.last(), Some(&(0x3E << 1)));
    assert_eq!(*sim.register_writes(XG_OFFS_TC).last().unwrap(), 0x21 << 1);
}

#[test]
fn test_firmware_failure_stops_bringup() {
    // The revision read is the first memory read, the third firmware verification read is the
    // fourth overall.
    let mut sim = SimDevice::new().nack_memory_read(4);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let err = mpu.dmp_initialize(&BringupConfig::default()).unwrap_err();
    assert_eq!(err.stage, BringupStage::FirmwareLoad);
    assert_eq!(err.code(), 1);
    assert_eq!(err.cause, Error::Bus(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)));
    assert_eq!(mpu.bringup_state(), BringupState::Failed { stage: BringupStage::FirmwareLoad, code: 1 });

    // Three firmware chunks made it, the config stream was never started.
    assert_eq!(sim.memory_writes(), vec![(0, 0, 16), (0, 16, 16), (0, 32, 16)]);
    assert!(sim.register_writes(INT_ENABLE).is_empty());
}

#[test]
fn test_config_failure_reports_code_2() {
    // 1 revision read, 121 firmware chunks, then the first config record.
    let firmware_chunks = 121;
    let mut sim = SimDevice::new().corrupt_memory_read(1 + firmware_chunks + 1);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let err = mpu.dmp_initialize(&BringupConfig::default()).unwrap_err();
    assert_eq!(err.stage, BringupStage::ConfigSet);
    assert_eq!(err.code(), 2);
    assert!(matches!(err.cause, Error::VerificationMismatch { bank: 3, address: 0x7B, .. }));
    assert!(sim.register_writes(INT_ENABLE).is_empty());
}

#[test]
fn test_fifo_timeout() {
    let mut sim = SimDevice::new().with_fifo_growth(0);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let config = BringupConfig { fifo_poll_limit: 5, fifo_poll_interval_us: 100, ..Default::default() };
    let err = mpu.dmp_initialize(&config).unwrap_err();
    assert_eq!(err.stage, BringupStage::MemoryUpdates);
    assert_eq!(err.code(), 9);
    assert_eq!(err.cause, Error::FifoTimeout { count: 0, polls: 5 });

    // 50 ms of settle time plus 4 pauses between the 5 polls.
    assert_eq!(delay.elapsed_ns, 50_000_000 + 4 * 100_000);
}

#[test]
fn test_failure_in_other_stages() {
    let cases = [
        (PWR_MGMT_1, BringupStage::Reset, 3),
        (I2C_SLV0_ADDR, BringupStage::AuxBus, 7),
        (SMPLRT_DIV, BringupStage::RegisterSetup, 8),
        (MOT_THR, BringupStage::MemoryUpdates, 9),
    ];
    for (register, stage, code) in cases {
        let mut sim = SimDevice::new().nack_register_write(register);
        let mut delay = SimDelay::default();
        let mut mpu = connect(&mut sim, &mut delay);

        let err = mpu.dmp_initialize(&BringupConfig::default()).unwrap_err();
        assert_eq!((err.stage, err.code()), (stage, code), "register {:#04x}", register);
        assert_eq!(mpu.bringup_state(), BringupState::Failed { stage, code });
    }
}

#[test]
fn test_bringup_restarts_from_reset() {
    let mut sim = SimDevice::new();
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);
    mpu.dmp_initialize(&BringupConfig::default()).unwrap();

    let (sim, _) = mpu.release();
    sim.clear_events();
    let mut delay = SimDelay::default();
    let mut mpu = connect(sim, &mut delay);
    mpu.dmp_initialize(&BringupConfig::default()).unwrap();
    assert_eq!(mpu.bringup_state(), BringupState::Ready);

    let (sim, _) = mpu.release();
    assert_eq!(
        sim.events()[0],
        crate::sim::Event::Read { register: PWR_MGMT_1, len: 1 }
    );
    assert_eq!(sim.register_writes(PWR_MGMT_1)[0] & (1 << PWR1_DEVICE_RESET_BIT), 0x80);
}

#[test]
fn test_stage_codes_are_distinct() {
    let stages = [
        BringupStage::Reset,
        BringupStage::WakeUp,
        BringupStage::RevisionProbe,
        BringupStage::TrimCapture,
        BringupStage::AuxBus,
        BringupStage::FirmwareLoad,
        BringupStage::ConfigSet,
        BringupStage::RegisterSetup,
        BringupStage::MemoryUpdates,
        BringupStage::Finalize,
    ];
    let mut codes: Vec<u8> = stages.iter().map(|s| s.code()).collect();
    codes.sort();
    assert_eq!(codes, (1..=10).collect::<Vec<u8>>());
}

#[test]
fn test_hardware_revision_reselects_bank_0() {
    let mut sim = SimDevice::new().with_revision(0x07);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    assert_eq!(mpu.get_hardware_revision().unwrap(), 0x07);
    assert_eq!(sim.bank_selects(), vec![0x70, 0x00]);
}

#[test]
fn test_unreadable_revision_does_not_stop_bringup() {
    // The revision byte is the first memory read.
    let mut sim = SimDevice::new().nack_memory_read(1);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let report = mpu.dmp_initialize(&BringupConfig::default()).unwrap();
    assert_eq!(mpu.bringup_state(), BringupState::Ready);
    assert_eq!(report.revision, None);
    assert_eq!(report.otp_bank_valid, Some(true));
    assert_eq!(report.config_bytes, 192);
    assert_eq!(&sim.bank_selects()[..3], &[0x70, 0x00, 0x00]);
}

#[test]
fn test_revision_stage_fails_when_bank_0_cannot_be_selected() {
    let mut sim = SimDevice::new().nack_register_write(DMP_BANK_SEL);
    let mut delay = SimDelay::default();
    let mut mpu = connect(&mut sim, &mut delay);

    let err = mpu.dmp_initialize(&BringupConfig::default()).unwrap_err();
    assert_eq!(err.stage, BringupStage::RevisionProbe);
    assert_eq!(err.code(), 5);
    assert_eq!(
        mpu.bringup_state(),
        BringupState::Failed { stage: BringupStage::RevisionProbe, code: 5 }
    );
}
