use std::io::{self, ErrorKind, Read, Write};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::codec::errors::{ReadingError, WritingError};
use crate::serial::{ReadFrom, WriteTo};

/// A variable length encoded `i64`.
///
/// Seven bits per byte, least significant group first, high bit set on every
/// byte but the last. Negative values are encoded from their two's complement
/// bits and always take [`VarLong::MAX_SIZE`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarLong(pub i64);

impl VarLong {
    /// The longest encoding of a `VarLong`.
    pub const MAX_SIZE: usize = 10;

    /// Returns the exact number of bytes [`VarLong::write`] produces for `val`.
    #[must_use]
    pub fn written_size(val: i64) -> usize {
        match val {
            0 => 1,
            n => (63 - (n as u64).leading_zeros() as usize) / 7 + 1,
        }
    }

    /// Writes the value to `writer`.
    pub fn write(self, writer: &mut impl Write) -> Result<(), WritingError> {
        let mut val = self.0 as u64;
        loop {
            let b = (val & 0x7F) as u8;
            val >>= 7;
            if val == 0 {
                b.write(writer)?;
                break;
            }
            (b | 0x80).write(writer)?;
        }
        Ok(())
    }

    /// Reads one value from `read`.
    ///
    /// A stream that ends before the first byte gives [`ReadingError::CleanEOF`].
    pub fn read(read: &mut impl Read) -> Result<i64, ReadingError> {
        let mut val = 0u64;
        for i in 0..Self::MAX_SIZE {
            let mut buf = [0u8];
            read.read_exact(&mut buf).map_err(|err| read_error(i, &err))?;
            let byte = buf[0];
            val |= (u64::from(byte) & 0x7F) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(val as i64);
            }
        }
        Err(ReadingError::TooLarge("VarLong".to_string()))
    }

    /// Async version of [`VarLong::read`].
    pub async fn read_async(read: &mut (impl AsyncRead + Unpin)) -> Result<i64, ReadingError> {
        let mut val = 0u64;
        for i in 0..Self::MAX_SIZE {
            let byte = read.read_u8().await.map_err(|err| read_error(i, &err))?;
            val |= (u64::from(byte) & 0x7F) << (i * 7);
            if byte & 0x80 == 0 {
                return Ok(val as i64);
            }
        }
        Err(ReadingError::TooLarge("VarLong".to_string()))
    }

    /// Async version of [`VarLong::write`].
    pub async fn write_async(
        self,
        write: &mut (impl AsyncWrite + Unpin),
    ) -> Result<(), WritingError> {
        let mut val = self.0 as u64;
        loop {
            let b = (val as u8) & 0b0111_1111;
            val >>= 7;
            write
                .write_u8(if val == 0 { b } else { b | 0b1000_0000 })
                .await
                .map_err(WritingError::IoError)?;
            if val == 0 {
                break;
            }
        }
        Ok(())
    }
}

impl ReadFrom for VarLong {
    fn read(data: &mut impl Read) -> Result<Self, ReadingError> {
        Ok(Self(Self::read(data)?))
    }
}

impl WriteTo for VarLong {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        (*self).write(writer)
    }
}

fn read_error(index: usize, err: &io::Error) -> ReadingError {
    if index == 0 && err.kind() == ErrorKind::UnexpectedEof {
        ReadingError::CleanEOF("VarLong".to_string())
    } else {
        ReadingError::Incomplete(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;

    use super::*;

    fn encode(val: i64) -> Vec<u8> {
        let mut buf = Vec::new();
        VarLong(val).write(&mut buf).expect("writing to a vec never fails");
        buf
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(encode(0), [0x00]);
        assert_eq!(encode(1), [0x01]);
        assert_eq!(encode(127), [0x7F]);
        assert_eq!(encode(128), [0x80, 0x01]);
        assert_eq!(encode(300), [0xAC, 0x02]);
        assert_eq!(
            encode(-1),
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
        );
    }

    #[test]
    fn test_written_size_matches_encoding() {
        for val in [0, 1, 127, 128, 81_000, i64::from(i32::MAX), i64::MAX, -1, i64::MIN] {
            assert_eq!(VarLong::written_size(val), encode(val).len(), "size of {val}");
        }
        assert_eq!(VarLong::written_size(i64::MAX), 9);
        assert_eq!(VarLong::written_size(-5), VarLong::MAX_SIZE);
    }

    #[test]
    fn test_read_back() {
        for val in [0, 300, 81_000, i64::MAX, i64::MIN] {
            let read = VarLong::read(&mut Cursor::new(encode(val))).expect("valid encoding");
            assert_eq!(read, val);
        }
    }

    #[test]
    fn test_too_large() {
        let bytes = [0x80u8; VarLong::MAX_SIZE + 1];
        let err = VarLong::read(&mut Cursor::new(bytes)).expect_err("eleven bytes");
        assert!(matches!(err, ReadingError::TooLarge(_)));
    }

    #[test]
    fn test_truncated() {
        let err = VarLong::read(&mut Cursor::new([0x80u8])).expect_err("missing last byte");
        assert!(matches!(err, ReadingError::Incomplete(_)));
    }

    #[test]
    fn test_clean_eof() {
        let err = VarLong::read(&mut Cursor::new(Vec::new())).expect_err("empty stream");
        assert!(matches!(err, ReadingError::CleanEOF(_)));
    }

    #[tokio::test]
    async fn test_async_matches_sync() {
        for val in [0, 128, 81_000 * 16, -42] {
            let mut buf = Vec::new();
            VarLong(val)
                .write_async(&mut buf)
                .await
                .expect("writing to a vec never fails");
            assert_eq!(buf, encode(val));

            let read = VarLong::read_async(&mut buf.as_slice())
                .await
                .expect("valid encoding");
            assert_eq!(read, val);
        }
    }

    #[tokio::test]
    async fn test_async_clean_eof() {
        let mut empty: &[u8] = &[];
        let err = VarLong::read_async(&mut empty)
            .await
            .expect_err("empty stream");
        assert!(matches!(err, ReadingError::CleanEOF(_)));
    }

    proptest! {
        #[test]
        fn test_round_trip(val in any::<i64>()) {
            let bytes = encode(val);
            prop_assert_eq!(bytes.len(), VarLong::written_size(val));
            prop_assert_eq!(VarLong::read(&mut Cursor::new(bytes)).expect("valid encoding"), val);
        }
    }
}
