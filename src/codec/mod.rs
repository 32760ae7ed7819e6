//! Byte-exact decoder/encoder for fixed-layout records.
//!
//! Every on-disk structure implements [`Record`]: a constant encoded size and
//! a pair of functions reading and writing its fields in declaration order.
//! Structures are declared with the [`layout!`] macro so that the field list,
//! the size and both directions of the codec cannot drift apart.

mod decode;
mod encode;
mod fields;

pub use decode::*;
pub use encode::*;
pub use fields::*;

use std::io::Write;

pub trait Record: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError>;

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError>;
}

macro_rules! primitive {
    ($ty:ty, $size:expr, $read:ident, $write:ident) => {
        impl Record for $ty {
            const SIZE: usize = $size;

            fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
                r.$read()
            }

            fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError> {
                w.$write(*self)
            }
        }
    };
}

primitive!(u8, 1, read_u8, write_u8);
primitive!(i8, 1, read_i8, write_i8);
primitive!(u16, 2, read_u16, write_u16);
primitive!(i16, 2, read_i16, write_i16);
primitive!(u32, 4, read_u32, write_u32);
primitive!(i32, 4, read_i32, write_i32);

impl<T: Record + Copy + Default, const N: usize> Record for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let mut items = [T::default(); N];
        for item in items.iter_mut() {
            *item = T::read_from(r)?;
        }
        Ok(items)
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError> {
        for item in self {
            item.write_to(w)?;
        }
        Ok(())
    }
}

/// Declares a struct whose fields are stored back to back, in declaration
/// order, with no padding, and implements [`Record`] for it.
macro_rules! layout {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::codec::Record for $name {
            const SIZE: usize = 0 $( + <$ty as $crate::codec::Record>::SIZE )*;

            fn read_from(
                r: &mut $crate::codec::Reader<'_>,
            ) -> ::std::result::Result<Self, $crate::codec::DecodeError> {
                ::std::result::Result::Ok(Self {
                    $( $field: <$ty as $crate::codec::Record>::read_from(r)?, )*
                })
            }

            fn write_to<W: ::std::io::Write>(
                &self,
                w: &mut $crate::codec::Writer<W>,
            ) -> ::std::result::Result<(), $crate::codec::EncodeError> {
                $( <$ty as $crate::codec::Record>::write_to(&self.$field, w)?; )*
                ::std::result::Result::Ok(())
            }
        }
    };
}

pub(crate) use layout;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Deterministic pseudo-random bytes, so that round-trip tests touch
    /// every bit of every field.
    pub(crate) fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (state >> 16) as u8
            })
            .collect()
    }

    layout! {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        struct Sample {
            flag: u8,
            count: u16,
            items: [i16; 3],
            tail: Opaque<5>,
        }
    }

    #[test]
    fn layout_size_is_sum_of_fields() {
        assert_eq!(Sample::SIZE, 1 + 2 + 6 + 5);
    }

    #[test]
    fn layout_reads_fields_in_declaration_order() {
        let data = [7, 0x34, 0x12, 1, 0, 0xff, 0xff, 2, 0, 9, 8, 7, 6, 5];
        let sample: Sample = decode(&data).unwrap();
        assert_eq!(sample.flag, 7);
        assert_eq!(sample.count, 0x1234);
        assert_eq!(sample.items, [1, -1, 2]);
        assert_eq!(sample.tail.0, [9, 8, 7, 6, 5]);
        assert_eq!(encode(&sample).unwrap(), data);
    }

    #[test]
    fn nested_arrays_round_trip() {
        let data = noise(<[[Sample; 2]; 3]>::SIZE, 1);
        let decoded: [[Sample; 2]; 3] = decode(&data).unwrap();
        assert_eq!(encode(&decoded).unwrap(), data);
    }
}
