use super::Record;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected end of file")]
    UnexpectedEof,
}

impl From<std::io::Error> for DecodeError {
    fn from(_: std::io::Error) -> Self {
        // reading from an in-memory slice can only fail by running out of bytes
        DecodeError::UnexpectedEof
    }
}

/// Decodes one fixed-size record from the start of `data`.
///
/// Bytes beyond [`Record::SIZE`] are ignored, fewer bytes fail with
/// [`DecodeError::UnexpectedEof`].
pub fn decode<R: Record>(data: &[u8]) -> Result<R, DecodeError> {
    if data.len() < R::SIZE {
        return Err(DecodeError::UnexpectedEof);
    }

    let mut reader = Reader::new(&data[..R::SIZE]);
    let record = R::read_from(&mut reader)?;
    debug_assert_eq!(reader.position(), R::SIZE);

    Ok(record)
}

/// Little-endian cursor over a borrowed byte slice.
pub struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.cursor.read_i8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(self.cursor.read_u16::<LittleEndian>()?)
    }

    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(self.cursor.read_i16::<LittleEndian>()?)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(self.cursor.read_u32::<LittleEndian>()?)
    }

    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(self.cursor.read_i32::<LittleEndian>()?)
    }

    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        self.cursor.read_exact(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;

    #[test]
    fn decoding_fails_for_empty_input() {
        assert_debug_snapshot!(decode::<u32>(b"").unwrap_err(), @"UnexpectedEof");
    }

    #[test]
    fn decoding_fails_for_truncated_input() {
        assert_debug_snapshot!(decode::<i32>(&[0x01, 0x02, 0x03]).unwrap_err(), @"UnexpectedEof");
    }

    #[test]
    fn decoding_is_little_endian() {
        assert_eq!(decode::<u16>(&[0x72, 0x73]).unwrap(), 0x7372);
        assert_eq!(decode::<i16>(&[0xff, 0xff]).unwrap(), -1);
        assert_eq!(decode::<u32>(&[0x3a, 0x02, 0x00, 0x00]).unwrap(), 0x023a);
    }

    #[test]
    fn decoding_ignores_trailing_bytes() {
        assert_eq!(decode::<u8>(&[0x28, 0xff, 0xff]).unwrap(), 0x28);
    }

    #[test]
    fn reader_tracks_position() {
        let data = [1, 0, 2, 0, 0, 0, 3];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.read_u16().unwrap(), 1);
        assert_eq!(reader.read_i32().unwrap(), 2);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.read_bytes::<1>().unwrap(), [3]);
        assert_debug_snapshot!(reader.read_u8().unwrap_err(), @"UnexpectedEof");
    }
}
