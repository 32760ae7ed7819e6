use super::match_summary::MatchSummary;
use super::stadium::Stadium;
use crate::codec::{Opaque, Text, layout};
use crate::consts::*;
use crate::index::{ClubRef, PlayerRef};

layout! {
    /// Ticket prices in pounds.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct TicketPrices {
        pub league_seating: u8,
        pub league_terrace: u8,
        pub cup_seating: u8,
        pub cup_terrace: u8,
    }
}

layout! {
    /// Each line holds `[debit, credit]`.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct BankStatement {
        pub gate_receipts: [i32; 2],
        pub club_wages: [i32; 2],
        pub transfer_fees: [i32; 2],
        pub club_fines: [i32; 2],
        pub grants_for_club: [i32; 2],
        pub club_bills: [i32; 2],
        pub miscellaneous_sales: [i32; 2],
        pub bank_loan_payments: [i32; 2],
        pub ground_improvements: [i32; 2],
        pub advertising_boards: [i32; 2],
        pub other_items: [i32; 2],
        pub account_interest: [i32; 2],
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Loan {
        pub amount: i32,
        pub years: u8,
        pub turns: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Employee {
        pub name: Text<14>,
        /// 0 assistant, 1 youth team, 2 physio, 3 scout, 7 head coach,
        /// 8..=11 handling/tackling/passing/shooting coach.
        pub role: u8,
        pub skill: u8,
        /// Years over 40.
        pub age: u8,
        pub unknown: u8,
    }
}

layout! {
    /// Assistant manager delegation, each flag 0 = n/a, 1 = yes, 2 = no.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct AssistantDuties {
        pub do_training_schedules: u8,
        pub treat_injured_players: u8,
        pub check_sponsors_boards: u8,
        pub hire_and_fire_employees: u8,
        pub negotiate_player_contracts: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ScoutResult {
        pub player: PlayerRef,
        pub extra: u16,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Scout {
        pub size: u8,
        pub division: u8,
        pub club: u8,
        pub skill: u8,
        pub rating: u8,
        pub foot: u8,
        pub results: [ScoutResult; 18],
        pub unknown: Opaque<6>,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct NewsItem {
        pub kind: u8,
        pub amount: i32,
        pub club: ClubRef,
        pub player: PlayerRef,
        pub extra: i16,
    }
}

layout! {
    /// A percentage rating, now and at the start of the season.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Confidence {
        pub current: u8,
        pub start: u8,
    }
}

impl Confidence {
    pub fn change(&self) -> i16 {
        i16::from(self.current) - i16::from(self.start)
    }
}

layout! {
    /// One finished season in the manager's career.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Season {
        pub year: u16,
        pub division: u8,
        pub club: ClubRef,
        pub position: u8,
        pub played: u8,
        pub won: u8,
        pub drawn: u8,
        pub lost: u8,
        pub goal_difference: i16,
        pub points: u16,
        pub unknown: Opaque<12>,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Titles {
        pub won: u8,
        pub years: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CompetitionRecord {
        pub played: u16,
        pub won: u16,
        pub drawn: u16,
        pub lost: u16,
        pub goals_for: u16,
        pub goals_against: u16,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PreviousClub {
        pub club: ClubRef,
        pub year_from: u16,
        pub year_to: u16,
        pub managerial: u8,
        pub directors: u8,
        pub supporters: u8,
    }
}

layout! {
    /// The manager's record against one opponent.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct HeadToHead {
        pub club: ClubRef,
        pub played: u8,
        pub won: u8,
        pub drawn: u8,
        pub goals_for: u16,
        pub goals_against: u16,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Tactic {
        pub name: Text<20>,
        pub positions: Opaque<100>,
    }
}

layout! {
    /// State of one human player's manager.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Manager {
        pub name: Text<16>,
        pub club: ClubRef,
        pub division: u8,
        pub contract_length: u8,
        pub prices: TicketPrices,
        pub seating_history: [u16; 23],
        pub terrace_history: [u16; 23],
        /// Daily and yearly statement.
        pub bank_statements: [BankStatement; 2],
        pub loans: [Loan; 4],
        /// Staff first, then the vacancies on offer, see [`STAFF_SLOTS`].
        pub employees: [Employee; EMPLOYEE_SLOTS],
        pub assistant: AssistantDuties,
        pub unknown_0: u8,
        /// Skill wanted from the youth team coach, 0..=3 handling..shooting.
        pub youth_player_kind: u8,
        pub unknown_1: u8,
        pub youth_player: PlayerRef,
        pub unknown_2: Opaque<18>,
        pub scouts: [Scout; 4],
        pub counters: [u16; 3],
        pub money_from_directors: i32,
        pub unknown_3: Opaque<14>,
        pub news: [NewsItem; 8],
        /// Always -1 in files written by the game.
        pub minus_one: i16,
        pub unknown_players: [PlayerRef; 2],
        pub unknown_4: Opaque<400>,
        pub stadium: Stadium,
        pub numbers: [u16; 4],
        pub managerial_rating: Confidence,
        pub directors_confidence: Confidence,
        pub supporters_confidence: Confidence,
        pub unknown_5: Opaque<6>,
        pub nominated_player_1: PlayerRef,
        pub unknown_6: Opaque<4>,
        pub nominated_player_2: PlayerRef,
        pub unknown_7: Opaque<6>,
        pub match_summary: MatchSummary,
        pub league_history: [Season; 20],
        pub titles: [Titles; 11],
        pub competition_records: [CompetitionRecord; 11],
        pub unknown_8: Opaque<26>,
        pub previous_clubs: [PreviousClub; 4],
        pub year_started_current_club: u16,
        pub manager_of_the_month_awards: u8,
        pub manager_of_the_year_awards: u8,
        pub head_to_head: [HeadToHead; 242],
        pub unknown_9: Opaque<64>,
        pub tactics: [Tactic; 8],
    }
}

impl Employee {
    pub fn is_vacant(&self) -> bool {
        self.name.is_blank()
    }
}

impl Manager {
    /// Hired staff, skipping empty slots. Vacancies on offer are not staff.
    pub fn staff_mut(&mut self) -> impl Iterator<Item = &mut Employee> {
        self.employees[..STAFF_SLOTS]
            .iter_mut()
            .filter(|employee| !employee.is_vacant())
    }
}
