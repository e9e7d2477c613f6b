use crate::Error;

/// One record of a DMP configuration stream.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRecord<'a> {
    /// Write `data` to DMP memory at `(bank, offset)`.
    Patch { bank: u8, offset: u8, data: &'a [u8] },

    /// A record without data, the byte following the header tells what to do instead. The bank
    /// and offset of such records carry no meaning (they are zero in all known tables).
    Special { bank: u8, offset: u8, opcode: u8 },
}

impl ConfigRecord<'_> {
    /// Number of bytes the record takes up in the stream.
    ///
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::Patch { data, .. } => 3 + data.len(),
            Self::Special { .. } => 4,
        }
    }
}

/// The stream ended in the middle of the record starting at `offset`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordError {
    pub offset: usize,
}

impl RecordError {
    pub fn into_error<E>(self) -> Error<E> {
        Error::TruncatedRecord { offset: self.offset }
    }
}

/// Iterator over the records of a configuration stream. A truncated record is yielded as an
/// error once, after which the iterator is exhausted.
///
#[derive(Debug, Clone)]
pub struct ConfigRecords<'a> {
    stream: &'a [u8],
    position: usize,
}

impl<'a> ConfigRecords<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        ConfigRecords { stream, position: 0 }
    }

    /// Number of bytes of the stream consumed by the records yielded so far.
    ///
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl<'a> Iterator for ConfigRecords<'a> {
    type Item = Result<ConfigRecord<'a>, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        let stream: &'a [u8] = self.stream;
        let rest = &stream[self.position..];
        if rest.is_empty() {
            return None;
        }
        let truncated = RecordError { offset: self.position };

        let record = match rest {
            [bank, offset, 0, opcode, ..] => ConfigRecord::Special {
                bank: *bank,
                offset: *offset,
                opcode: *opcode,
            },
            [bank, offset, length, data @ ..] if *length > 0 && data.len() >= *length as usize => {
                ConfigRecord::Patch {
                    bank: *bank,
                    offset: *offset,
                    data: &data[..*length as usize],
                }
            }
            _ => {
                self.position = stream.len();
                return Some(Err(truncated));
            }
        };
        self.position += record.encoded_len();
        Some(Ok(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_and_special() {
        let stream = [1, 10, 2, 0xAA, 0xBB, 0, 0, 0, 0x01];
        let mut records = ConfigRecords::new(&stream);
        assert_eq!(
            records.next(),
            Some(Ok(ConfigRecord::Patch { bank: 1, offset: 10, data: &[0xAA, 0xBB] }))
        );
        assert_eq!(records.consumed(), 5);
        assert_eq!(
            records.next(),
            Some(Ok(ConfigRecord::Special { bank: 0, offset: 0, opcode: 0x01 }))
        );
        assert_eq!(records.consumed(), 9);
        assert_eq!(records.next(), None);
    }

    #[test]
    fn test_truncated_payload() {
        let stream = [1, 10, 1, 0xAA, 2, 20, 4, 0x01, 0x02];
        let mut records = ConfigRecords::new(&stream);
        assert!(matches!(records.next(), Some(Ok(ConfigRecord::Patch { .. }))));
        assert_eq!(records.next(), Some(Err(RecordError { offset: 4 })));
        assert_eq!(records.next(), None);
    }

    #[test]
    fn test_truncated_header() {
        let mut records = ConfigRecords::new(&[3, 0x7B]);
        assert_eq!(records.next(), Some(Err(RecordError { offset: 0 })));

        // Special record missing its opcode.
        let mut records = ConfigRecords::new(&[0, 0, 0]);
        assert_eq!(records.next(), Some(Err(RecordError { offset: 0 })));
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(ConfigRecords::new(&[]).next(), None);
    }
}
