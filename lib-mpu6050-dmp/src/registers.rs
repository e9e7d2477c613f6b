//! Register map of the MPU6050, addresses and bit positions as documented in the register map
//! data sheet (revision 4.2) and the undocumented DMP registers as used by the InvenSense
//! MotionApps code. Bit positions follow the `(high_bit, length)` convention used by
//! `Mpu6050::read_bits` and `Mpu6050::write_bits`.

pub const XG_OFFS_TC: u8 = 0x00; //[7] PWR_MODE, [6:1] XG_OFFS_TC, [0] OTP_BNK_VLD
pub const YG_OFFS_TC: u8 = 0x01; //[7] PWR_MODE, [6:1] YG_OFFS_TC, [0] OTP_BNK_VLD
pub const ZG_OFFS_TC: u8 = 0x02; //[7] PWR_MODE, [6:1] ZG_OFFS_TC, [0] OTP_BNK_VLD
pub const X_FINE_GAIN: u8 = 0x03; //[7:0] X_FINE_GAIN
pub const Y_FINE_GAIN: u8 = 0x04; //[7:0] Y_FINE_GAIN
pub const Z_FINE_GAIN: u8 = 0x05; //[7:0] Z_FINE_GAIN

pub const XA_OFFS_H: u8 = 0x06; //[15:0] XA_OFFS
pub const XA_OFFS_L_TC: u8 = 0x07;
pub const YA_OFFS_H: u8 = 0x08; //[15:0] YA_OFFS
pub const YA_OFFS_L_TC: u8 = 0x09;
pub const ZA_OFFS_H: u8 = 0x0A; //[15:0] ZA_OFFS
pub const ZA_OFFS_L_TC: u8 = 0x0B;

pub const SELF_TEST_X: u8 = 0x0D; //[7:5] XA_TEST[4-2], [4:0] XG_TEST[4-0]
pub const SELF_TEST_Y: u8 = 0x0E; //[7:5] YA_TEST[4-2], [4:0] YG_TEST[4-0]
pub const SELF_TEST_Z: u8 = 0x0F; //[7:5] ZA_TEST[4-2], [4:0] ZG_TEST[4-0]
pub const SELF_TEST_A: u8 = 0x10; //[5:4] XA_TEST[1-0], [3:2] YA_TEST[1-0], [1:0] ZA_TEST[1-0]

pub const XG_OFFS_USRH: u8 = 0x13; //[15:0] XG_OFFS_USR
pub const XG_OFFS_USRL: u8 = 0x14;
pub const YG_OFFS_USRH: u8 = 0x15; //[15:0] YG_OFFS_USR
pub const YG_OFFS_USRL: u8 = 0x16;
pub const ZG_OFFS_USRH: u8 = 0x17; //[15:0] ZG_OFFS_USR
pub const ZG_OFFS_USRL: u8 = 0x18;

pub const SMPLRT_DIV: u8 = 0x19;

pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;

pub const FF_THR: u8 = 0x1D;
pub const FF_DUR: u8 = 0x1E;
pub const MOT_THR: u8 = 0x1F;
pub const MOT_DUR: u8 = 0x20;
pub const ZERO_MOT_THR: u8 = 0x21;
pub const ZERO_MOT_DUR: u8 = 0x22;

pub const FIFO_EN: u8 = 0x23;

pub const I2C_MST_CTRL: u8 = 0x24;
pub const I2C_SLV0_ADDR: u8 = 0x25;
pub const I2C_SLV0_REG: u8 = 0x26;
pub const I2C_SLV0_CTRL: u8 = 0x27;
pub const I2C_SLV1_ADDR: u8 = 0x28;
pub const I2C_SLV1_REG: u8 = 0x29;
pub const I2C_SLV1_CTRL: u8 = 0x2A;
pub const I2C_SLV2_ADDR: u8 = 0x2B;
pub const I2C_SLV2_REG: u8 = 0x2C;
pub const I2C_SLV2_CTRL: u8 = 0x2D;
pub const I2C_SLV3_ADDR: u8 = 0x2E;
pub const I2C_SLV3_REG: u8 = 0x2F;
pub const I2C_SLV3_CTRL: u8 = 0x30;
pub const I2C_SLV4_ADDR: u8 = 0x31;
pub const I2C_SLV4_REG: u8 = 0x32;
pub const I2C_SLV4_DO: u8 = 0x33;
pub const I2C_SLV4_CTRL: u8 = 0x34;
pub const I2C_SLV4_DI: u8 = 0x35;
pub const I2C_MST_STATUS: u8 = 0x36;

pub const INT_PIN_CFG: u8 = 0x37;
pub const INT_ENABLE: u8 = 0x38;
pub const DMP_INT_STATUS: u8 = 0x39;
pub const INT_STATUS: u8 = 0x3A;

pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const ACCEL_XOUT_L: u8 = 0x3C;
pub const ACCEL_YOUT_H: u8 = 0x3D;
pub const ACCEL_YOUT_L: u8 = 0x3E;
pub const ACCEL_ZOUT_H: u8 = 0x3F;
pub const ACCEL_ZOUT_L: u8 = 0x40;

pub const TEMP_OUT_H: u8 = 0x41;
pub const TEMP_OUT_L: u8 = 0x42;

pub const GYRO_XOUT_H: u8 = 0x43;
pub const GYRO_XOUT_L: u8 = 0x44;
pub const GYRO_YOUT_H: u8 = 0x45;
pub const GYRO_YOUT_L: u8 = 0x46;
pub const GYRO_ZOUT_H: u8 = 0x47;
pub const GYRO_ZOUT_L: u8 = 0x48;

/// First of the 24 `EXT_SENS_DATA_xx` registers (0x49 ..= 0x60).
pub const EXT_SENS_DATA_00: u8 = 0x49;

pub const MOT_DETECT_STATUS: u8 = 0x61;
pub const I2C_SLV0_DO: u8 = 0x63;
pub const I2C_SLV1_DO: u8 = 0x64;
pub const I2C_SLV2_DO: u8 = 0x65;
pub const I2C_SLV3_DO: u8 = 0x66;
pub const I2C_MST_DELAY_CTRL: u8 = 0x67;
pub const SIGNAL_PATH_RESET: u8 = 0x68;
pub const MOT_DETECT_CTRL: u8 = 0x69;

pub const USER_CTRL: u8 = 0x6A;
pub const PWR_MGMT_1: u8 = 0x6B;
pub const PWR_MGMT_2: u8 = 0x6C;

pub const DMP_BANK_SEL: u8 = 0x6D;
pub const DMP_MEM_START_ADDR: u8 = 0x6E;
pub const DMP_MEM_R_W: u8 = 0x6F;
pub const DMP_CFG_1: u8 = 0x70;
pub const DMP_CFG_2: u8 = 0x71;

pub const FIFO_COUNT_H: u8 = 0x72;
pub const FIFO_COUNT_L: u8 = 0x73;
pub const FIFO_R_W: u8 = 0x74;

pub const WHO_AM_I: u8 = 0x75;

// XG/YG/ZG_OFFS_TC
pub const TC_PWR_MODE_BIT: u8 = 7;
pub const TC_OFFSET_BIT: u8 = 6;
pub const TC_OFFSET_LENGTH: u8 = 6;
pub const TC_OTP_BNK_VLD_BIT: u8 = 0;

// SELF_TEST_X/Y/Z/A
pub const SELF_TEST_XA_1_BIT: u8 = 7;
pub const SELF_TEST_XA_1_LENGTH: u8 = 3;
pub const SELF_TEST_XA_2_BIT: u8 = 5;
pub const SELF_TEST_XA_2_LENGTH: u8 = 2;
pub const SELF_TEST_YA_1_BIT: u8 = 7;
pub const SELF_TEST_YA_1_LENGTH: u8 = 3;
pub const SELF_TEST_YA_2_BIT: u8 = 3;
pub const SELF_TEST_YA_2_LENGTH: u8 = 2;
pub const SELF_TEST_ZA_1_BIT: u8 = 7;
pub const SELF_TEST_ZA_1_LENGTH: u8 = 3;
pub const SELF_TEST_ZA_2_BIT: u8 = 1;
pub const SELF_TEST_ZA_2_LENGTH: u8 = 2;
pub const SELF_TEST_XG_1_BIT: u8 = 4;
pub const SELF_TEST_XG_1_LENGTH: u8 = 5;
pub const SELF_TEST_YG_1_BIT: u8 = 4;
pub const SELF_TEST_YG_1_LENGTH: u8 = 5;
pub const SELF_TEST_ZG_1_BIT: u8 = 4;
pub const SELF_TEST_ZG_1_LENGTH: u8 = 5;

// CONFIG
pub const CFG_EXT_SYNC_SET_BIT: u8 = 5;
pub const CFG_EXT_SYNC_SET_LENGTH: u8 = 3;
pub const CFG_DLPF_CFG_BIT: u8 = 2;
pub const CFG_DLPF_CFG_LENGTH: u8 = 3;

// GYRO_CONFIG
pub const GCONFIG_FS_SEL_BIT: u8 = 4;
pub const GCONFIG_FS_SEL_LENGTH: u8 = 2;

// ACCEL_CONFIG
pub const ACONFIG_XA_ST_BIT: u8 = 7;
pub const ACONFIG_YA_ST_BIT: u8 = 6;
pub const ACONFIG_ZA_ST_BIT: u8 = 5;
pub const ACONFIG_AFS_SEL_BIT: u8 = 4;
pub const ACONFIG_AFS_SEL_LENGTH: u8 = 2;
pub const ACONFIG_ACCEL_HPF_BIT: u8 = 2;
pub const ACONFIG_ACCEL_HPF_LENGTH: u8 = 3;

// FIFO_EN
pub const TEMP_FIFO_EN_BIT: u8 = 7;
pub const XG_FIFO_EN_BIT: u8 = 6;
pub const YG_FIFO_EN_BIT: u8 = 5;
pub const ZG_FIFO_EN_BIT: u8 = 4;
pub const ACCEL_FIFO_EN_BIT: u8 = 3;
pub const SLV2_FIFO_EN_BIT: u8 = 2;
pub const SLV1_FIFO_EN_BIT: u8 = 1;
pub const SLV0_FIFO_EN_BIT: u8 = 0;

// I2C_MST_CTRL
pub const MULT_MST_EN_BIT: u8 = 7;
pub const WAIT_FOR_ES_BIT: u8 = 6;
pub const SLV_3_FIFO_EN_BIT: u8 = 5;
pub const I2C_MST_P_NSR_BIT: u8 = 4;
pub const I2C_MST_CLK_BIT: u8 = 3;
pub const I2C_MST_CLK_LENGTH: u8 = 4;

// I2C_SLVx_ADDR / I2C_SLVx_CTRL
pub const I2C_SLV_RW_BIT: u8 = 7;
pub const I2C_SLV_ADDR_BIT: u8 = 6;
pub const I2C_SLV_ADDR_LENGTH: u8 = 7;
pub const I2C_SLV_EN_BIT: u8 = 7;
pub const I2C_SLV_BYTE_SW_BIT: u8 = 6;
pub const I2C_SLV_REG_DIS_BIT: u8 = 5;
pub const I2C_SLV_GRP_BIT: u8 = 4;
pub const I2C_SLV_LEN_BIT: u8 = 3;
pub const I2C_SLV_LEN_LENGTH: u8 = 4;

// I2C_SLV4_ADDR / I2C_SLV4_CTRL
pub const I2C_SLV4_RW_BIT: u8 = 7;
pub const I2C_SLV4_ADDR_BIT: u8 = 6;
pub const I2C_SLV4_ADDR_LENGTH: u8 = 7;
pub const I2C_SLV4_EN_BIT: u8 = 7;
pub const I2C_SLV4_INT_EN_BIT: u8 = 6;
pub const I2C_SLV4_REG_DIS_BIT: u8 = 5;
pub const I2C_SLV4_MST_DLY_BIT: u8 = 4;
pub const I2C_SLV4_MST_DLY_LENGTH: u8 = 5;

// I2C_MST_STATUS
pub const MST_PASS_THROUGH_BIT: u8 = 7;
pub const MST_I2C_SLV4_DONE_BIT: u8 = 6;
pub const MST_I2C_LOST_ARB_BIT: u8 = 5;
pub const MST_I2C_SLV4_NACK_BIT: u8 = 4;
pub const MST_I2C_SLV3_NACK_BIT: u8 = 3;
pub const MST_I2C_SLV2_NACK_BIT: u8 = 2;
pub const MST_I2C_SLV1_NACK_BIT: u8 = 1;
pub const MST_I2C_SLV0_NACK_BIT: u8 = 0;

// INT_PIN_CFG
pub const INTCFG_INT_LEVEL_BIT: u8 = 7;
pub const INTCFG_INT_OPEN_BIT: u8 = 6;
pub const INTCFG_LATCH_INT_EN_BIT: u8 = 5;
pub const INTCFG_INT_RD_CLEAR_BIT: u8 = 4;
pub const INTCFG_FSYNC_INT_LEVEL_BIT: u8 = 3;
pub const INTCFG_FSYNC_INT_EN_BIT: u8 = 2;
pub const INTCFG_I2C_BYPASS_EN_BIT: u8 = 1;
pub const INTCFG_CLKOUT_EN_BIT: u8 = 0;

// INT_ENABLE / INT_STATUS
pub const INTERRUPT_FF_BIT: u8 = 7;
pub const INTERRUPT_MOT_BIT: u8 = 6;
pub const INTERRUPT_ZMOT_BIT: u8 = 5;
pub const INTERRUPT_FIFO_OFLOW_BIT: u8 = 4;
pub const INTERRUPT_I2C_MST_INT_BIT: u8 = 3;
pub const INTERRUPT_PLL_RDY_INT_BIT: u8 = 2;
pub const INTERRUPT_DMP_INT_BIT: u8 = 1;
pub const INTERRUPT_DATA_RDY_BIT: u8 = 0;

// DMP_INT_STATUS
pub const DMPINT_5_BIT: u8 = 5;
pub const DMPINT_4_BIT: u8 = 4;
pub const DMPINT_3_BIT: u8 = 3;
pub const DMPINT_2_BIT: u8 = 2;
pub const DMPINT_1_BIT: u8 = 1;
pub const DMPINT_0_BIT: u8 = 0;

// MOT_DETECT_STATUS
pub const MOTION_MOT_XNEG_BIT: u8 = 7;
pub const MOTION_MOT_XPOS_BIT: u8 = 6;
pub const MOTION_MOT_YNEG_BIT: u8 = 5;
pub const MOTION_MOT_YPOS_BIT: u8 = 4;
pub const MOTION_MOT_ZNEG_BIT: u8 = 3;
pub const MOTION_MOT_ZPOS_BIT: u8 = 2;
pub const MOTION_MOT_ZRMOT_BIT: u8 = 0;

// I2C_MST_DELAY_CTRL
pub const DELAYCTRL_DELAY_ES_SHADOW_BIT: u8 = 7;
pub const DELAYCTRL_I2C_SLV4_DLY_EN_BIT: u8 = 4;
pub const DELAYCTRL_I2C_SLV3_DLY_EN_BIT: u8 = 3;
pub const DELAYCTRL_I2C_SLV2_DLY_EN_BIT: u8 = 2;
pub const DELAYCTRL_I2C_SLV1_DLY_EN_BIT: u8 = 1;
pub const DELAYCTRL_I2C_SLV0_DLY_EN_BIT: u8 = 0;

// SIGNAL_PATH_RESET
pub const PATHRESET_GYRO_RESET_BIT: u8 = 2;
pub const PATHRESET_ACCEL_RESET_BIT: u8 = 1;
pub const PATHRESET_TEMP_RESET_BIT: u8 = 0;

// MOT_DETECT_CTRL
pub const DETECT_ACCEL_ON_DELAY_BIT: u8 = 5;
pub const DETECT_ACCEL_ON_DELAY_LENGTH: u8 = 2;
pub const DETECT_FF_COUNT_BIT: u8 = 3;
pub const DETECT_FF_COUNT_LENGTH: u8 = 2;
pub const DETECT_MOT_COUNT_BIT: u8 = 1;
pub const DETECT_MOT_COUNT_LENGTH: u8 = 2;

// USER_CTRL
pub const USERCTRL_DMP_EN_BIT: u8 = 7;
pub const USERCTRL_FIFO_EN_BIT: u8 = 6;
pub const USERCTRL_I2C_MST_EN_BIT: u8 = 5;
pub const USERCTRL_I2C_IF_DIS_BIT: u8 = 4;
pub const USERCTRL_DMP_RESET_BIT: u8 = 3;
pub const USERCTRL_FIFO_RESET_BIT: u8 = 2;
pub const USERCTRL_I2C_MST_RESET_BIT: u8 = 1;
pub const USERCTRL_SIG_COND_RESET_BIT: u8 = 0;

// PWR_MGMT_1
pub const PWR1_DEVICE_RESET_BIT: u8 = 7;
pub const PWR1_SLEEP_BIT: u8 = 6;
pub const PWR1_CYCLE_BIT: u8 = 5;
pub const PWR1_TEMP_DIS_BIT: u8 = 3;
pub const PWR1_CLKSEL_BIT: u8 = 2;
pub const PWR1_CLKSEL_LENGTH: u8 = 3;

// PWR_MGMT_2
pub const PWR2_LP_WAKE_CTRL_BIT: u8 = 7;
pub const PWR2_LP_WAKE_CTRL_LENGTH: u8 = 2;
pub const PWR2_STBY_XA_BIT: u8 = 5;
pub const PWR2_STBY_YA_BIT: u8 = 4;
pub const PWR2_STBY_ZA_BIT: u8 = 3;
pub const PWR2_STBY_XG_BIT: u8 = 2;
pub const PWR2_STBY_YG_BIT: u8 = 1;
pub const PWR2_STBY_ZG_BIT: u8 = 0;

// BANK_SEL
pub const BANKSEL_PRFTCH_EN_BIT: u8 = 6;
pub const BANKSEL_CFG_USER_BANK_BIT: u8 = 5;
pub const BANKSEL_MEM_SEL_BIT: u8 = 4;
pub const BANKSEL_MEM_SEL_LENGTH: u8 = 5;

// WHO_AM_I
pub const WHO_AM_I_BIT: u8 = 6;
pub const WHO_AM_I_LENGTH: u8 = 6;

/// Number of DMP program memory banks.
pub const DMP_MEMORY_BANKS: u8 = 8;

/// Size of a single DMP memory bank in bytes.
pub const DMP_MEMORY_BANK_SIZE: usize = 256;

/// Largest transfer that is sent to `DMP_MEM_R_W` in one go.
pub const DMP_MEMORY_CHUNK_SIZE: usize = 16;
