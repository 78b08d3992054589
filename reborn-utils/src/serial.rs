//! Traits for types with a fixed wire representation.

use std::io::{Read, Write};

use crate::codec::{ReadingError, WritingError};

/// A type that can be decoded from a byte stream.
pub trait ReadFrom: Sized {
    /// Reads one value.
    fn read(data: &mut impl Read) -> Result<Self, ReadingError>;
}

/// A type that can be encoded into a byte stream.
pub trait WriteTo {
    /// Writes this value.
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError>;
}

impl WriteTo for u8 {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        writer.write_all(&[*self])?;
        Ok(())
    }
}
