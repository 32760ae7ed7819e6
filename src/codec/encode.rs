use super::Record;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Cursor, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("encoded {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Encodes one record into a buffer of exactly [`Record::SIZE`] bytes.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(R::SIZE)));
    record.write_to(&mut writer)?;
    let data = writer.into_inner().into_inner();

    if data.len() != R::SIZE {
        return Err(EncodeError::SizeMismatch {
            expected: R::SIZE,
            actual: data.len(),
        });
    }

    Ok(data)
}

pub struct Writer<W: Write> {
    writer: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self { writer: inner }
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        Ok(self.writer.write_u8(value)?)
    }

    pub fn write_i8(&mut self, value: i8) -> Result<(), EncodeError> {
        Ok(self.writer.write_i8(value)?)
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        Ok(self.writer.write_u16::<LittleEndian>(value)?)
    }

    pub fn write_i16(&mut self, value: i16) -> Result<(), EncodeError> {
        Ok(self.writer.write_i16::<LittleEndian>(value)?)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        Ok(self.writer.write_u32::<LittleEndian>(value)?)
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), EncodeError> {
        Ok(self.writer.write_i32::<LittleEndian>(value)?)
    }

    pub fn write_bytes(&mut self, value: &[u8]) -> Result<(), EncodeError> {
        Ok(self.writer.write_all(value)?)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
