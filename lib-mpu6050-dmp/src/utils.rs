//! Bit twiddling helpers for sub-byte register fields. A field is described by the position of
//! its most significant bit (`high_bit`) and its width (`length`), i.e. the field with
//! `high_bit = 4` and `length = 3` covers bits `4:2`:
//!
//! ```text
//! 76543210 bit numbers
//!    xxx   high_bit=4, length=3
//! 00011100 mask
//! ```

/// Checks that the field `(high_bit, length)` lies within a register that is `width` bits wide.
///
#[inline]
pub const fn valid_field(high_bit: u8, length: u8, width: u8) -> bool {
    high_bit < width && length <= high_bit + 1
}

/// Mask of the field `(high_bit, length)` within a byte, the field must be valid.
///
#[inline]
pub const fn bit_mask(high_bit: u8, length: u8) -> u8 {
    word_mask(high_bit, length) as u8
}

/// Extracts the right-aligned value of a field from a register byte.
///
#[inline]
pub const fn extract_bits(register: u8, high_bit: u8, length: u8) -> u8 {
    extract_bits_word(register as u16, high_bit, length) as u8
}

/// Returns `register` with the field replaced by `value`. Bits of `value` that do not fit in the
/// field are dropped and all bits outside of the field are left untouched.
///
#[inline]
pub const fn insert_bits(register: u8, high_bit: u8, length: u8, value: u8) -> u8 {
    insert_bits_word(register as u16, high_bit, length, value as u16) as u8
}

/// Mask of the field `(high_bit, length)` within a 16 bit word.
///
#[inline]
pub const fn word_mask(high_bit: u8, length: u8) -> u16 {
    wide_mask(high_bit, length) as u16
}

#[inline]
pub const fn extract_bits_word(register: u16, high_bit: u8, length: u8) -> u16 {
    (((register as u32) & wide_mask(high_bit, length)) >> shift(high_bit, length)) as u16
}

#[inline]
pub const fn insert_bits_word(register: u16, high_bit: u8, length: u8, value: u16) -> u16 {
    let mask = wide_mask(high_bit, length);
    let field = ((value as u32) << shift(high_bit, length)) & mask;
    (((register as u32) & !mask) | field) as u16
}

// Done in 32 bits so a full 16 bit field or an empty field at bit 15 never overflows a shift.
#[inline]
const fn wide_mask(high_bit: u8, length: u8) -> u32 {
    ((1u32 << length) - 1) << shift(high_bit, length)
}

/// Position of the least significant bit of the field.
#[inline]
const fn shift(high_bit: u8, length: u8) -> u32 {
    (high_bit as u32) + 1 - (length as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_mask_examples() {
        assert_eq!(bit_mask(4, 3), 0b0001_1100);
        assert_eq!(bit_mask(7, 8), 0xFF);
        assert_eq!(bit_mask(0, 1), 0b0000_0001);
        assert_eq!(bit_mask(6, 6), 0b0111_1110);
        assert_eq!(bit_mask(5, 0), 0);
        assert_eq!(word_mask(15, 16), 0xFFFF);
        assert_eq!(word_mask(12, 3), 0b0001_1100_0000_0000);
    }

    #[test]
    pub fn test_extract_documented_example() {
        // 01101001 read byte, bits 4:2 hold 010.
        assert_eq!(extract_bits(0b0110_1001, 4, 3), 0b010);
    }

    #[test]
    pub fn test_insert_documented_example() {
        // 10101111 & ~00011100 | 010 << 2
        assert_eq!(insert_bits(0b1010_1111, 4, 3, 0b010), 0b1010_1011);
    }

    #[test]
    pub fn test_valid_field() {
        assert!(valid_field(7, 8, 8));
        assert!(valid_field(0, 0, 8));
        assert!(valid_field(3, 0, 8));
        assert!(!valid_field(8, 1, 8));
        assert!(!valid_field(2, 4, 8));
        assert!(valid_field(15, 16, 16));
        assert!(!valid_field(16, 1, 16));
    }

    /// Every valid field, every starting register value and every value to write: reading the
    /// field back gives the value modulo the field width and no other bit changes.
    ///
    #[test]
    pub fn test_round_trip_exhaustive() {
        for high_bit in 0..8u8 {
            for length in 0..=(high_bit + 1) {
                let mask = bit_mask(high_bit, length);
                assert_eq!(mask.count_ones(), length as u32);
                for register in 0..=255u8 {
                    for value in 0..=255u8 {
                        let written = insert_bits(register, high_bit, length, value);
                        let expected = ((value as u16) & ((1u16 << length) - 1)) as u8;
                        assert_eq!(extract_bits(written, high_bit, length), expected);
                        assert_eq!(written & !mask, register & !mask);
                    }
                }
            }
        }
    }

    #[test]
    pub fn test_word_round_trip() {
        let samples = [0x0000u16, 0xFFFF, 0xA5A5, 0x1234, 0x8001];
        for high_bit in 0..16u8 {
            for length in 0..=(high_bit + 1) {
                let mask = word_mask(high_bit, length);
                for &register in samples.iter() {
                    for &value in samples.iter() {
                        let written = insert_bits_word(register, high_bit, length, value);
                        let expected = ((value as u32) & ((1u32 << length) - 1)) as u16;
                        assert_eq!(extract_bits_word(written, high_bit, length), expected);
                        assert_eq!(written & !mask, register & !mask);
                    }
                }
            }
        }
    }
}
