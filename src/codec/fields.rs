use super::{DecodeError, EncodeError, Reader, Record, Writer};
use encoding_rs::WINDOWS_1252;
use std::fmt;
use std::io::Write;

/// Fixed-width text field.
///
/// The raw bytes are kept as stored, including anything after the first NUL,
/// so that an untouched field encodes back to the same bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Text<const N: usize>([u8; N]);

impl<const N: usize> Text<N> {
    /// Builds a field from `value` with `strncpy` semantics: at most `N`
    /// bytes are copied and the remainder is zero-filled.
    pub fn new(value: &str) -> Self {
        let mut text = Self::default();
        text.set(value);
        text
    }

    pub fn from_bytes(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// The content up to the first NUL, decoded as Windows-1252.
    pub fn to_string_lossy(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        let (text, _) = WINDOWS_1252.decode_without_bom_handling(&self.0[..end]);
        text.into_owned()
    }

    pub fn is_blank(&self) -> bool {
        self.0
            .iter()
            .take_while(|&&b| b != 0)
            .all(|b| b.is_ascii_whitespace())
    }

    pub fn set(&mut self, value: &str) {
        let (encoded, _, _) = WINDOWS_1252.encode(value);
        let len = encoded.len().min(N);
        self.0 = [0; N];
        self.0[..len].copy_from_slice(&encoded[..len]);
    }

    /// Copy of this field with every byte after the first NUL cleared, the
    /// way a `strncpy` from this field would store it.
    pub fn terminated(&self) -> Self {
        let mut bytes = [0; N];
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        bytes[..end].copy_from_slice(&self.0[..end]);
        Self(bytes)
    }
}

impl<const N: usize> Default for Text<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Debug for Text<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl<const N: usize> fmt::Display for Text<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl<const N: usize> Record for Text<N> {
    const SIZE: usize = N;

    fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self(r.read_bytes()?))
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError> {
        w.write_bytes(&self.0)
    }
}

/// Byte range whose meaning is unknown. Only ever copied through unchanged.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Opaque<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for Opaque<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Debug for Opaque<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque<{N}>")
    }
}

impl<const N: usize> Record for Opaque<N> {
    const SIZE: usize = N;

    fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self(r.read_bytes()?))
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError> {
        w.write_bytes(&self.0)
    }
}
