use crate::codec::{DecodeError, EncodeError, Opaque, Reader, Record, Text, Writer, layout};
use crate::consts::*;
use crate::error::{Error, Result};
use crate::index::{OpponentRef, PlayerRef};
use std::io::Write;

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Rgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Kit {
        pub shirt_design: u8,
        pub shirt_primary: Rgb,
        pub shirt_secondary: Rgb,
        pub shorts: Rgb,
        pub socks: Rgb,
    }
}

layout! {
    /// One match day of a club's season timetable.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MatchDay {
        pub opponent: OpponentRef,
        /// `0xFF` until played, then home goals in the high nibble and away
        /// goals in the low nibble.
        pub result: u8,
        /// Match type in the low five bits, venue in the high three.
        pub flags: u8,
    }
}

/// Where a timetabled match is played, from the club's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    HomeFriendly,
    Away,
    AwayFriendly,
    Other(u8),
}

impl MatchDay {
    pub fn is_played(&self) -> bool {
        self.result != UNPLAYED
    }

    /// `(home, away)` goals once the match has been played.
    pub fn score(&self) -> Option<(u8, u8)> {
        self.is_played()
            .then(|| (self.result >> 4, self.result & 0x0f))
    }

    pub fn match_type(&self) -> u8 {
        self.flags & 0x1f
    }

    pub fn venue(&self) -> Venue {
        match self.flags >> 5 {
            0 => Venue::Home,
            1 => Venue::HomeFriendly,
            2 => Venue::Away,
            3 => Venue::AwayFriendly,
            other => Venue::Other(other),
        }
    }
}

layout! {
    /// One entry of the club table (`GAME<N>B`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Club {
        pub name: Text<16>,
        pub manager: Text<16>,
        pub bank_account: i32,
        pub stadium: Text<24>,
        pub seating_avg: u16,
        pub seating_max: u16,
        pub unknown_0: Opaque<20>,
        /// Squad, `PlayerRef::NONE` for an empty slot.
        pub player_index: [PlayerRef; ROSTER_SIZE],
        pub unknown_1: Opaque<28>,
        /// Division the club plays in; 0 for clubs outside the English league.
        pub league: u8,
        pub kits: [Kit; 3],
        pub player_image: u8,
        pub timetable: [[MatchDay; DAYS_PER_WEEK]; TIMETABLE_WEEKS],
    }
}

const _: () = assert!(Club::SIZE == CLUB_SIZE);

impl Club {
    /// Whether the club takes part in a league competition.
    pub fn is_competing(&self) -> bool {
        self.league != 0
    }

    /// Occupied roster slots as `(slot, player index)`.
    pub fn roster(&self) -> impl Iterator<Item = (usize, i16)> + '_ {
        self.player_index
            .iter()
            .enumerate()
            .filter_map(|(slot, player)| player.get().map(|idx| (slot, idx)))
    }
}

/// The whole club table, exactly [`CLUB_IDX_MAX`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubDatabase {
    clubs: Vec<Club>,
}

impl ClubDatabase {
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Resolves a stored club index. Anything outside `[0, CLUB_IDX_MAX)`,
    /// the `-1` sentinel included, is rejected.
    pub fn get(&self, idx: i32) -> Result<&Club> {
        checked(idx)
            .map(|i| &self.clubs[i])
            .ok_or(Error::ClubIndexOutOfRange(idx))
    }

    pub fn get_mut(&mut self, idx: i32) -> Result<&mut Club> {
        checked(idx)
            .map(|i| &mut self.clubs[i])
            .ok_or(Error::ClubIndexOutOfRange(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Club> {
        self.clubs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Club> {
        self.clubs.iter_mut()
    }
}

fn checked(idx: i32) -> Option<usize> {
    usize::try_from(idx).ok().filter(|&i| i < CLUB_IDX_MAX)
}

impl Record for ClubDatabase {
    const SIZE: usize = Club::SIZE * CLUB_IDX_MAX;

    fn read_from(r: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        let clubs = (0..CLUB_IDX_MAX)
            .map(|_| Club::read_from(r))
            .collect::<std::result::Result<_, _>>()?;
        Ok(Self { clubs })
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> std::result::Result<(), EncodeError> {
        for club in &self.clubs {
            club.write_to(w)?;
        }
        Ok(())
    }
}
