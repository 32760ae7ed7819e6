use crate::codec::{Opaque, layout};
use crate::index::{ClubRef, PlayerRef, RefereeRef};

layout! {
    /// One player's box score in the last match.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct LineupEntry {
        pub player: PlayerRef,
        pub unknown_0: Opaque<5>,
        pub fitness: u8,
        /// 1 = booked, 4 = sent off.
        pub card: u8,
        pub shots_attempted: u8,
        pub shots_missed: u8,
        pub shots_other: u8,
        pub tackles_attempted: u8,
        pub tackles_won: u8,
        pub passes_attempted: u8,
        pub passes_bad: u8,
        pub shots_saved: u8,
        pub unknown_1: Opaque<3>,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Goal {
        pub scorer: PlayerRef,
        /// Match time in seconds.
        pub time: u16,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SideSummary {
        pub club: ClubRef,
        pub total_goals: u8,
        pub first_half_goals: u8,
        pub pattern: Opaque<6>,
        pub match_data: Opaque<6>,
        pub corners: u8,
        pub throw_ins: u8,
        pub free_kicks: u8,
        pub penalties: u8,
        pub lineup: [LineupEntry; 14],
        pub goals: [Goal; 8],
        /// Always zero in files written by the game.
        pub always_null: u16,
        pub substitutions_remaining: u8,
        pub other: u8,
        pub home_away_data: u16,
    }
}

layout! {
    /// Snapshot of the most recent match played by a manager's club.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MatchSummary {
        /// Home side first.
        pub sides: [SideSummary; 2],
        pub weather: u16,
        pub referee: RefereeRef,
        pub unknown_0: Opaque<8>,
        pub match_type: u8,
        pub unknown_1: Opaque<5>,
        pub audience: u32,
        pub unknown_2: Opaque<8>,
    }
}

/// Team totals over all lineup entries of one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxScore {
    pub shots_attempted: u32,
    pub shots_missed: u32,
    pub shots_saved: u32,
    pub tackles_attempted: u32,
    pub tackles_won: u32,
    pub passes_attempted: u32,
    pub passes_bad: u32,
}

impl SideSummary {
    pub fn totals(&self) -> BoxScore {
        self.lineup
            .iter()
            .fold(BoxScore::default(), |mut total, entry| {
                total.shots_attempted += u32::from(entry.shots_attempted);
                total.shots_missed += u32::from(entry.shots_missed);
                total.shots_saved += u32::from(entry.shots_saved);
                total.tackles_attempted += u32::from(entry.tackles_attempted);
                total.tackles_won += u32::from(entry.tackles_won);
                total.passes_attempted += u32::from(entry.passes_attempted);
                total.passes_bad += u32::from(entry.passes_bad);
                total
            })
    }

    /// Goals actually scored, in the order recorded.
    pub fn scorers(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|goal| !goal.scorer.is_none())
    }
}
