//! DMP configuration record streams. Each record is `[bank, offset, length, data...]`, a record
//! with length 0 is followed by a single special instruction byte instead of data. See
//! [`super::ConfigRecords`] for the parser.

/// Configuration applied right after the firmware has been loaded, 30 records of which one is a
/// special instruction.
///
pub static DMP_CONFIG: [u8; 192] = [
    0x03, 0x7B, 0x03, 0x4C, 0xCD, 0x6C,
    0x03, 0xAB, 0x03, 0x36, 0x56, 0x76,
    0x00, 0x68, 0x04, 0x02, 0xCB, 0x47, 0xA2,
    0x02, 0x18, 0x04, 0x00, 0x05, 0x8B, 0xC1,
    0x01, 0x0C, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x03, 0x7F, 0x06, 0x0C, 0xC9, 0x2C, 0x97, 0x97, 0x97,
    0x03, 0x89, 0x03, 0x26, 0x46, 0x66,
    0x00, 0x6C, 0x02, 0x20, 0x00,
    0x02, 0x40, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x44, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x48, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x4C, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x50, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x54, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x58, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0x5C, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x02, 0xBC, 0x04, 0x00, 0x00, 0x00, 0x00,
    0x01, 0xEC, 0x04, 0x00, 0x00, 0x40, 0x00,
    0x03, 0x7F, 0x06, 0x0C, 0xC9, 0x2C, 0x97, 0x97, 0x97,
    0x04, 0x02, 0x03, 0x0D, 0x35, 0x5D,
    0x04, 0x09, 0x04, 0x87, 0x2D, 0x35, 0x3D,
    0x00, 0xA3, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x01, // special instruction
    0x07, 0x86, 0x01, 0xFE,
    0x07, 0x41, 0x05, 0xF1, 0x20, 0x28, 0x30, 0x38,
    0x07, 0x7E, 0x01, 0x30,
    0x07, 0x46, 0x01, 0x9A,
    0x07, 0x47, 0x04, 0xF1, 0x28, 0x30, 0x38,
    0x07, 0x6C, 0x04, 0xF1, 0x28, 0x30, 0x38,
    0x02, 0x16, 0x02, 0x00, 0x01, // FIFO rate divisor
];

/// Patches written during the bring-up after the registers have been set up, always applied in
/// order.
///
pub static DMP_UPDATES: [u8; 47] = [
    0x01, 0xB2, 0x02, 0xFF, 0xFF,
    0x01, 0x90, 0x04, 0x09, 0x23, 0xA1, 0x35,
    0x01, 0x6A, 0x02, 0x06, 0x00,
    0x01, 0x60, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x60, 0x04, 0x40, 0x00, 0x00, 0x00,
    0x01, 0x62, 0x02, 0x00, 0x00,
    0x00, 0x60, 0x04, 0x00, 0x40, 0x00, 0x00,
];

/// Number of records in [`DMP_UPDATES`].
pub const DMP_UPDATE_COUNT: usize = 7;
