//! Cross-record references.
//!
//! The save files point from one table into another with small integers and
//! mark a missing reference with a sentinel (`-1`, or `0xFF` for the one-byte
//! timetable opponent). The wrappers below keep the raw stored value, so that
//! even malformed references survive a round trip, and turn the sentinel into
//! `None` at the API boundary.

use crate::codec::{DecodeError, EncodeError, Reader, Record, Writer};
use crate::consts::*;
use std::fmt;
use std::io::Write;

macro_rules! index_ref {
    ($(#[$meta:meta])* $name:ident, $limit:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(i16);

        impl $name {
            pub const NONE: Self = Self(NO_INDEX);
            /// Number of entries in the referenced table.
            pub const LIMIT: usize = $limit;

            /// Reference to entry `idx`, or `None` if the table has no such entry.
            pub fn new(idx: usize) -> Option<Self> {
                (idx < Self::LIMIT).then(|| Self(idx as i16))
            }

            pub fn from_raw(raw: i16) -> Self {
                Self(raw)
            }

            pub fn raw(self) -> i16 {
                self.0
            }

            pub fn is_none(self) -> bool {
                self.0 == NO_INDEX
            }

            /// The stored index, or `None` for the sentinel. Other out-of-range
            /// values are passed through; resolving them fails.
            pub fn get(self) -> Option<i16> {
                (!self.is_none()).then_some(self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NONE
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.get() {
                    Some(idx) => write!(f, "{}({})", stringify!($name), idx),
                    None => write!(f, "{}::NONE", stringify!($name)),
                }
            }
        }

        impl Record for $name {
            const SIZE: usize = 2;

            fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
                Ok(Self(r.read_i16()?))
            }

            fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError> {
                w.write_i16(self.0)
            }
        }
    };
}

index_ref!(
    /// Index into the player table.
    PlayerRef,
    PLAYER_COUNT
);

index_ref!(
    /// Index into the club table.
    ClubRef,
    CLUB_IDX_MAX
);

index_ref!(
    /// Index into the referee list of the world state.
    RefereeRef,
    REFEREE_COUNT
);

/// One-byte club index used by the club timetables.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpponentRef(u8);

impl OpponentRef {
    pub const NONE: Self = Self(NO_OPPONENT);

    pub fn new(idx: usize) -> Option<Self> {
        (idx < CLUB_IDX_MAX).then(|| Self(idx as u8))
    }

    pub fn raw(self) -> u8 {
        self.0
    }

    pub fn get(self) -> Option<u8> {
        (self.0 != NO_OPPONENT).then_some(self.0)
    }
}

impl Default for OpponentRef {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for OpponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(idx) => write!(f, "OpponentRef({idx})"),
            None => write!(f, "OpponentRef::NONE"),
        }
    }
}

impl Record for OpponentRef {
    const SIZE: usize = 1;

    fn read_from(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self(r.read_u8()?))
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> Result<(), EncodeError> {
        w.write_u8(self.0)
    }
}
