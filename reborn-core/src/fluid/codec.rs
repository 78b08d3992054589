//! Network and NBT encoding of [`FluidValue`].

use std::io::{Read, Write};

use reborn_utils::codec::{ReadingError, VarLong, WritingError};
use reborn_utils::serial::{ReadFrom, WriteTo};
use simdnbt::owned::NbtCompound;
use tokio::io::{AsyncRead, AsyncWrite};

use super::FluidValue;

const NBT_KEY: &str = "value";

impl ReadFrom for FluidValue {
    fn read(data: &mut impl Read) -> Result<Self, ReadingError> {
        Ok(Self::from_raw(VarLong::read(data)?))
    }
}

impl WriteTo for FluidValue {
    fn write(&self, writer: &mut impl Write) -> Result<(), WritingError> {
        VarLong(self.raw_value()).write(writer)
    }
}

impl FluidValue {
    /// Reads a value sent as a single `VarLong`.
    pub async fn read_async(read: &mut (impl AsyncRead + Unpin)) -> Result<Self, ReadingError> {
        Ok(Self::from_raw(VarLong::read_async(read).await?))
    }

    /// Writes this value as a single `VarLong`.
    pub async fn write_async(
        self,
        write: &mut (impl AsyncWrite + Unpin),
    ) -> Result<(), WritingError> {
        VarLong(self.raw_value()).write_async(write).await
    }

    /// Stores this value under the `value` key of `nbt`.
    pub fn save(self, nbt: &mut NbtCompound) {
        nbt.insert(NBT_KEY, self.raw_value());
    }

    /// Reads a value stored by [`FluidValue::save`]. Returns `None` if the key is missing.
    #[must_use]
    pub fn load(nbt: &NbtCompound) -> Option<Self> {
        nbt.long(NBT_KEY).map(Self::from_raw)
    }
}
