//! Read-only traversals across the club and player tables.

use crate::club::Club;
use crate::consts::*;
use crate::error::Result;
use crate::player::Player;
use crate::slot::SaveSlot;
use tracing::warn;

/// A rostered player together with the club holding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubPlayer<'a> {
    pub club_idx: usize,
    pub club: &'a Club,
    pub slot: usize,
    pub player_idx: usize,
    pub player: &'a Player,
}

/// A player referenced from the rosters of two different clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateAssignment {
    pub player: usize,
    /// The first club, in table order, holding the player.
    pub first_club: usize,
    pub second_club: usize,
}

/// A roster entry pointing outside the player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference {
    pub club: usize,
    pub slot: usize,
    pub value: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub duplicates: Vec<DuplicateAssignment>,
    /// Players held by no club, in index order.
    pub unassigned: Vec<usize>,
    pub dangling: Vec<DanglingReference>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.unassigned.is_empty() && self.dangling.is_empty()
    }
}

impl SaveSlot {
    /// Players out of contract at clubs that play in a league, in club then
    /// roster-slot order.
    pub fn find_free_players(&self) -> Result<Vec<ClubPlayer<'_>>> {
        let mut free = Vec::new();
        for club_idx in 0..CLUB_IDX_MAX {
            let club = self.resolve_club(club_idx as i32)?;
            if !club.is_competing() {
                continue;
            }
            for entry in self.club_players(club_idx, club)? {
                if entry.player.is_free_agent() {
                    free.push(entry);
                }
            }
        }
        Ok(free)
    }

    /// The squad of the club run by `manager`, in roster-slot order.
    pub fn roster(&self, manager: usize) -> Result<Vec<ClubPlayer<'_>>> {
        let club_ref = self.world.manager(manager)?.club;
        let club_idx = i32::from(club_ref.raw());
        let club = self.resolve_club(club_idx)?;
        self.club_players(club_idx as usize, club)
    }

    fn club_players<'a>(&'a self, club_idx: usize, club: &'a Club) -> Result<Vec<ClubPlayer<'a>>> {
        club.roster()
            .map(|(slot, idx)| -> Result<ClubPlayer<'a>> {
                Ok(ClubPlayer {
                    club_idx,
                    club,
                    slot,
                    player_idx: idx as usize,
                    player: self.resolve_player(i32::from(idx))?,
                })
            })
            .collect()
    }

    /// Audits roster references. Findings are logged and returned, never
    /// treated as errors.
    pub fn check_consistency(&self) -> ConsistencyReport {
        let mut report = ConsistencyReport::default();
        let mut owner: Vec<Option<usize>> = vec![None; PLAYER_COUNT];

        for (club_idx, club) in self.clubs.iter().enumerate() {
            for (slot, idx) in club.roster() {
                let Some(held_by) = usize::try_from(idx)
                    .ok()
                    .and_then(|i| owner.get_mut(i))
                else {
                    warn!(club = club_idx, slot, value = idx, "roster entry outside player table");
                    report.dangling.push(DanglingReference {
                        club: club_idx,
                        slot,
                        value: idx,
                    });
                    continue;
                };

                match *held_by {
                    None => *held_by = Some(club_idx),
                    Some(first_club) => {
                        warn!(
                            player = idx,
                            first_club,
                            second_club = club_idx,
                            "player on two rosters"
                        );
                        report.duplicates.push(DuplicateAssignment {
                            player: idx as usize,
                            first_club,
                            second_club: club_idx,
                        });
                    }
                }
            }
        }

        for (player, held_by) in owner.iter().enumerate() {
            if held_by.is_none() {
                warn!(player, "player without a club");
                report.unassigned.push(player);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::index::{ClubRef, PlayerRef};
    use crate::slot::tests::blank_slot;
    use insta::assert_debug_snapshot;

    fn sign(slot: &mut SaveSlot, club: i32, roster_slot: usize, player: i16) {
        slot.clubs.get_mut(club).unwrap().player_index[roster_slot] = PlayerRef::from_raw(player);
    }

    fn free_indices(slot: &SaveSlot) -> Vec<(usize, usize)> {
        slot.find_free_players()
            .unwrap()
            .iter()
            .map(|entry| (entry.club_idx, entry.player_idx))
            .collect()
    }

    #[test]
    fn free_players_skip_clubs_outside_the_league() {
        let mut slot = blank_slot();
        sign(&mut slot, 3, 0, 42);
        slot.players.get_mut(42).unwrap().contract = 0;
        assert!(free_indices(&slot).is_empty());

        slot.clubs.get_mut(3).unwrap().league = 1;
        assert_eq!(free_indices(&slot), vec![(3, 42)]);
    }

    #[test]
    fn players_under_contract_are_never_free() {
        let mut slot = blank_slot();
        sign(&mut slot, 3, 0, 42);
        slot.players.get_mut(42).unwrap().contract = 2;
        slot.clubs.get_mut(3).unwrap().league = 1;
        assert!(free_indices(&slot).is_empty());
    }

    #[test]
    fn free_players_are_ordered_by_club_then_slot() {
        let mut slot = blank_slot();
        for club in [200, 7] {
            slot.clubs.get_mut(club).unwrap().league = 5;
        }
        sign(&mut slot, 200, 1, 9);
        sign(&mut slot, 7, 20, 10);
        sign(&mut slot, 7, 2, 11);

        let free = slot.find_free_players().unwrap();
        let order: Vec<(usize, usize, usize)> = free
            .iter()
            .map(|entry| (entry.club_idx, entry.slot, entry.player_idx))
            .collect();
        assert_eq!(order, vec![(7, 2, 11), (7, 20, 10), (200, 1, 9)]);
    }

    #[test]
    fn free_player_scan_rejects_dangling_roster_entries() {
        let mut slot = blank_slot();
        slot.clubs.get_mut(0).unwrap().league = 1;
        sign(&mut slot, 0, 0, 5000);
        assert!(matches!(
            slot.find_free_players(),
            Err(Error::PlayerIndexOutOfRange(5000))
        ));
    }

    #[test]
    fn roster_of_selected_manager() {
        let mut slot = blank_slot();
        slot.world.second_manager.club = ClubRef::from_raw(30);
        sign(&mut slot, 30, 5, 100);
        sign(&mut slot, 30, 0, 101);
        slot.players.get_mut(100).unwrap().name.set("LE TISSIER");

        let roster = slot.roster(1).unwrap();
        let names: Vec<(usize, String)> = roster
            .iter()
            .map(|entry| (entry.slot, entry.player.name.to_string_lossy()))
            .collect();
        assert_eq!(names, vec![(0, String::new()), (5, "LE TISSIER".to_string())]);
    }

    #[test]
    fn roster_of_unassigned_manager_fails() {
        let mut slot = blank_slot();
        slot.world.first_manager.club = ClubRef::NONE;
        assert!(matches!(slot.roster(0), Err(Error::ClubIndexOutOfRange(-1))));
        assert!(matches!(slot.roster(2), Err(Error::InvalidManager(2))));
    }

    #[test]
    fn duplicate_assignment_names_both_clubs() {
        let mut slot = blank_slot();
        for idx in 0..PLAYER_COUNT {
            let club = (idx / ROSTER_SIZE) as i32;
            sign(&mut slot, club, idx % ROSTER_SIZE, idx as i16);
        }
        // player 5 already plays for club 0; move that slot to club 2 and
        // add a second reference from club 7
        sign(&mut slot, 0, 5, -1);
        sign(&mut slot, 2, 0, 5);
        sign(&mut slot, 7, 0, 5);
        // the two slots overwritten above held players 48 and 168
        let report = slot.check_consistency();

        assert_debug_snapshot!(report.duplicates, @r###"
        [
            DuplicateAssignment {
                player: 5,
                first_club: 2,
                second_club: 7,
            },
        ]
        "###);
        assert_eq!(report.unassigned, vec![48, 168]);
        assert!(report.dangling.is_empty());
    }

    #[test]
    fn unassigned_player_reported_once() {
        let mut slot = blank_slot();
        for idx in 0..PLAYER_COUNT {
            if idx == 1234 {
                continue;
            }
            let club = (idx / ROSTER_SIZE) as i32;
            sign(&mut slot, club, idx % ROSTER_SIZE, idx as i16);
        }

        let report = slot.check_consistency();
        assert!(report.duplicates.is_empty());
        assert_eq!(report.unassigned, vec![1234]);
    }

    #[test]
    fn dangling_references_are_reported_not_fatal() {
        let mut slot = blank_slot();
        sign(&mut slot, 9, 3, 4000);
        let report = slot.check_consistency();
        assert_debug_snapshot!(report.dangling, @r###"
        [
            DanglingReference {
                club: 9,
                slot: 3,
                value: 4000,
            },
        ]
        "###);
        assert_eq!(report.unassigned.len(), PLAYER_COUNT);
        assert!(!report.is_clean());
    }
}
