//! World state (`GAME<N>A`): league and cup competitions, transfers,
//! referees and both human managers.

mod manager;
mod match_summary;
mod stadium;

pub use manager::*;
pub use match_summary::*;
pub use stadium::*;

use crate::codec::{Opaque, Record, Text, layout};
use crate::consts::*;
use crate::error::{Error, Result};
use crate::index::{ClubRef, PlayerRef};

layout! {
    /// Won/drawn/lost and goals for one half of a league table row.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ResultLine {
        pub won: u8,
        pub drawn: u8,
        pub lost: u8,
        pub goals_for: u8,
        pub goals_against: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct LeagueTableRow {
        pub club: ClubRef,
        pub home: ResultLine,
        pub away: ResultLine,
        pub unknown: Opaque<3>,
    }
}

impl LeagueTableRow {
    pub fn points(&self) -> u16 {
        let won = u16::from(self.home.won) + u16::from(self.away.won);
        let drawn = u16::from(self.home.drawn) + u16::from(self.away.drawn);
        won * 3 + drawn
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct TopScorer {
        pub player: PlayerRef,
        pub club: ClubRef,
        pub played: u8,
        pub scored: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Referee {
        pub name: Text<14>,
        /// Years over 40.
        pub age: u8,
        pub magic: u8,
        pub unknown: Opaque<4>,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct TieSide {
        pub club: ClubRef,
        pub goals: u8,
        pub audience: u16,
    }
}

layout! {
    /// A cup draw or a played match, home side first.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CupTie {
        pub sides: [TieSide; 2],
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ChampionEntry {
        /// 0 for an unused entry.
        pub year: u16,
        pub club: ClubRef,
        pub unknown: Opaque<4>,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CupFinal {
        /// 0 for an unused entry.
        pub year: u16,
        pub winner: ClubRef,
        pub winner_type: u8,
        pub runner_up: ClubRef,
        pub runner_up_type: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct FixturePair {
        pub home: ClubRef,
        pub away: ClubRef,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MarketListing {
        pub player: PlayerRef,
        pub club: ClubRef,
        pub unknown: Opaque<4>,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Transfer {
        pub player: PlayerRef,
        pub from: ClubRef,
        pub to: ClubRef,
        pub fee: i32,
    }
}

layout! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct WorldState {
        /// Clubs by division: 22 premier, 24 + 24 division one and two,
        /// 22 division three, 22 conference, 4 others.
        pub club_index: [ClubRef; 118],
        pub table: [LeagueTableRow; 114],
        pub unknown_0: u16,
        pub unknown_1: u16,
        pub unknown_2: u32,
        /// 15 per division.
        pub top_scorers: [TopScorer; 75],
        pub sorted_clubs: [ClubRef; 64],
        pub referees: [Referee; REFEREE_COUNT],
        /// F.A. cup, league cup and the three european cups back to back.
        pub cup_ties: [CupTie; 149],
        pub cup_schedule: Opaque<256>,
        pub charity_shield: CupTie,
        pub unknown_ties: [CupTie; 11],
        pub last_results: [CupTie; 47],
        /// Previous champions per division.
        pub champions: [[ChampionEntry; 20]; 5],
        /// Previous finals per cup competition.
        pub cup_finals: [[CupFinal; 20]; 6],
        pub fixtures: [FixturePair; 20],
        pub unknown_3: Opaque<2048>,
        pub transfer_market: [MarketListing; 45],
        pub unknown_4: Opaque<512>,
        pub transfers: [Transfer; 6],
        pub unknown_5: Opaque<128>,
        pub retired_manager_name: Text<16>,
        pub retired_manager_club: ClubRef,
        pub new_manager_club: ClubRef,
        pub unknown_6: Opaque<64>,
        pub year: u16,
        /// Three turns per week.
        pub turn: u16,
        pub unknown_7: [u16; 16],
        pub first_manager: Manager,
        pub second_manager: Manager,
        pub unknown_8: Opaque<5548>,
        pub counters: [u16; 3],
    }
}

const _: () = assert!(WorldState::SIZE == WORLD_STATE_SIZE);

/// A known-magic value that does not hold. Reported, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanityIssue {
    ManagerMarker { manager: usize, value: i16 },
    SummaryNullWord { manager: usize, side: usize, value: u16 },
    Substitutions { manager: usize, side: usize, value: u8 },
}

impl WorldState {
    pub fn manager(&self, idx: usize) -> Result<&Manager> {
        match idx {
            0 => Ok(&self.first_manager),
            1 => Ok(&self.second_manager),
            _ => Err(Error::InvalidManager(idx)),
        }
    }

    pub fn manager_mut(&mut self, idx: usize) -> Result<&mut Manager> {
        match idx {
            0 => Ok(&mut self.first_manager),
            1 => Ok(&mut self.second_manager),
            _ => Err(Error::InvalidManager(idx)),
        }
    }

    pub fn managers(&self) -> [&Manager; MANAGER_COUNT] {
        [&self.first_manager, &self.second_manager]
    }

    /// 1-based week of the season.
    pub fn week(&self) -> u16 {
        self.turn / DAYS_PER_WEEK as u16 + 1
    }

    /// Match day within the week, 0..3.
    pub fn day(&self) -> u16 {
        self.turn % DAYS_PER_WEEK as u16
    }

    pub fn sanity_issues(&self) -> Vec<SanityIssue> {
        let mut issues = Vec::new();

        for (m, manager) in self.managers().into_iter().enumerate() {
            if manager.minus_one != NO_INDEX {
                issues.push(SanityIssue::ManagerMarker {
                    manager: m,
                    value: manager.minus_one,
                });
            }

            for (s, side) in manager.match_summary.sides.iter().enumerate() {
                if side.club.is_none() {
                    continue;
                }
                if side.always_null != 0 {
                    issues.push(SanityIssue::SummaryNullWord {
                        manager: m,
                        side: s,
                        value: side.always_null,
                    });
                }
                if side.substitutions_remaining >= 3 {
                    issues.push(SanityIssue::Substitutions {
                        manager: m,
                        side: s,
                        value: side.substitutions_remaining,
                    });
                }
            }
        }

        issues
    }
}
