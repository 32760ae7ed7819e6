//! In-place edits of a loaded save slot.
//!
//! Every edit validates all indices it is going to follow before it changes
//! anything, so a failed edit leaves the slot untouched. Persisting the result
//! is up to the caller.

mod bands;

pub use bands::*;

use crate::consts::*;
use crate::error::{Error, Result};
use crate::index::ClubRef;
use crate::player::{Player, PlayerKind};
use crate::slot::SaveSlot;
use tracing::debug;

/// The skill each roster slot is tuned for by [`SaveSlot::soup_up`].
pub const SQUAD_POSITIONS: [PlayerKind; ROSTER_SIZE] = {
    use PlayerKind::*;
    [
        Goalkeeper, Defender, Defender, Midfielder, Defender, Defender, // 0..6
        Attacker, Attacker, Attacker, Attacker, Midfielder, Goalkeeper, // 6..12
        Defender, Midfielder, Attacker, Goalkeeper, Defender, Midfielder, // 12..18
        Attacker, Defender, Midfielder, Attacker, Defender, Attacker, // 18..24
    ]
};

impl SaveSlot {
    /// Moves `manager` to club `new_club`.
    ///
    /// The manager's division, ticket prices and ground are reset to the
    /// starting configuration of the new club's division. The old club's
    /// player image and manager name move along and the old club gets the
    /// default manager name.
    pub fn change_club(&mut self, manager: usize, new_club: i32) -> Result<()> {
        let band = usize::try_from(new_club)
            .ok()
            .and_then(Band::for_club)
            .ok_or(Error::UnrecognizedClub(new_club))?;
        let new_ref = ClubRef::from_raw(new_club as i16);

        let old_club = i32::from(self.world.manager(manager)?.club.raw());
        let old = self.clubs.get(old_club)?;
        let (player_image, manager_name) = (old.player_image, old.manager.terminated());

        let state = self.world.manager_mut(manager)?;
        state.club = new_ref;
        state.division = band.division;
        state.prices = band.prices;
        band.apply_to(&mut state.stadium);

        if old_club != new_club {
            let new = self.clubs.get_mut(new_club)?;
            new.player_image = player_image;
            new.manager = manager_name;
            self.clubs.get_mut(old_club)?.manager.set(DEFAULT_MANAGER_NAME);
        }

        debug!(manager, old_club, new_club, division = band.division, "changed club");
        Ok(())
    }

    /// Gives every player in the table the same aggression.
    pub fn level_aggression(&mut self) {
        for player in self.players.iter_mut() {
            player.aggression = LEVELED_AGGRESSION;
        }
        debug!(aggression = LEVELED_AGGRESSION, "leveled aggression");
    }

    /// Maxes out the staff and squad of the club run by `manager`.
    ///
    /// Staff skill goes to the maximum. Each rostered player gets the
    /// baseline in all four position skills, the maximum in the one matching
    /// their roster slot (see [`SQUAD_POSITIONS`]), maximum heading, control
    /// and fitness, and a low morale.
    pub fn soup_up(&mut self, manager: usize) -> Result<()> {
        let club_idx = i32::from(self.world.manager(manager)?.club.raw());
        let roster: Vec<(usize, i16)> = self.clubs.get(club_idx)?.roster().collect();
        for &(_, idx) in &roster {
            self.players.get(i32::from(idx))?;
        }

        let mut staff = 0;
        for employee in self.world.manager_mut(manager)?.staff_mut() {
            employee.skill = SOUPED_STAFF_SKILL;
            staff += 1;
        }

        for &(slot, idx) in &roster {
            let player = self.players.get_mut(i32::from(idx))?;
            soup_up_player(player, SQUAD_POSITIONS[slot]);
        }

        debug!(manager, club = club_idx, staff, players = roster.len(), "souped up");
        Ok(())
    }
}

fn soup_up_player(player: &mut Player, position: PlayerKind) {
    player.handling = SOUPED_BASELINE;
    player.tackling = SOUPED_BASELINE;
    player.passing = SOUPED_BASELINE;
    player.shooting = SOUPED_BASELINE;

    let skill = match position {
        PlayerKind::Goalkeeper => &mut player.handling,
        PlayerKind::Defender => &mut player.tackling,
        PlayerKind::Midfielder => &mut player.passing,
        PlayerKind::Attacker => &mut player.shooting,
    };
    *skill = SOUPED_SKILL;

    player.heading = SOUPED_SKILL;
    player.control = SOUPED_SKILL;
    player.fitness = SOUPED_SKILL;
    player.morale = SOUPED_MORALE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Text;
    use crate::index::PlayerRef;
    use crate::slot::tests::blank_slot;
    use crate::world::Stadium;
    use insta::assert_debug_snapshot;

    fn managed_slot(club: i16) -> SaveSlot {
        let mut slot = blank_slot();
        slot.world.first_manager.club = ClubRef::from_raw(club);
        let old = slot.clubs.get_mut(i32::from(club)).unwrap();
        old.manager = Text::from_bytes(*b"H. KENDALL\0\x77\x77\x77\x77\x77");
        old.player_image = 4;
        slot
    }

    #[test]
    fn change_club_across_band_edge() {
        let mut first = managed_slot(100);
        first.change_club(0, 21).unwrap();
        let mut second = managed_slot(100);
        second.change_club(0, 22).unwrap();

        let (a, b) = (&first.world.first_manager, &second.world.first_manager);
        assert_eq!(a.division, 0);
        assert_eq!(b.division, 1);
        assert_ne!(a.stadium, b.stadium);
        assert_eq!(a.stadium.ground_facilities.level, 3);
        assert_eq!(b.stadium.ground_facilities.level, 2);
        assert_eq!(a.stadium.safety_rating, [4; 4]);
        assert_eq!(b.stadium.total_capacity(), 20_000);
        assert_debug_snapshot!(b.prices, @r###"
        TicketPrices {
            league_seating: 13,
            league_terrace: 11,
            cup_seating: 16,
            cup_terrace: 13,
        }
        "###);
    }

    #[test]
    fn change_club_moves_manager_name_and_image() {
        let mut slot = managed_slot(100);
        slot.change_club(0, 50).unwrap();

        assert_eq!(slot.world.first_manager.club, ClubRef::from_raw(50));
        let new = slot.resolve_club(50).unwrap();
        assert_eq!(new.player_image, 4);
        assert_eq!(new.manager.as_bytes(), b"H. KENDALL\0\0\0\0\0\0");
        let old = slot.resolve_club(100).unwrap();
        assert_eq!(old.manager.as_bytes(), b"J. SMITH\0\0\0\0\0\0\0\0");
    }

    #[test]
    fn change_club_to_same_club_keeps_manager_name() {
        let mut slot = managed_slot(10);
        slot.change_club(0, 10).unwrap();
        assert_eq!(slot.resolve_club(10).unwrap().manager.to_string_lossy(), "H. KENDALL");
        assert_eq!(slot.world.first_manager.stadium.ground_facilities.level, 3);
    }

    #[test]
    fn change_club_outside_bands_changes_nothing() {
        let mut slot = managed_slot(100);
        let before = slot.clone();

        assert_debug_snapshot!(slot.change_club(0, 114).unwrap_err(), @r###"
        UnrecognizedClub(
            114,
        )
        "###);
        assert!(matches!(slot.change_club(0, -1), Err(Error::UnrecognizedClub(-1))));
        assert_eq!(slot, before);
    }

    #[test]
    fn change_club_of_second_manager() {
        let mut slot = managed_slot(100);
        slot.world.second_manager.club = ClubRef::from_raw(70);
        slot.change_club(1, 92).unwrap();

        assert_eq!(slot.world.second_manager.division, 4);
        assert_eq!(slot.world.first_manager.stadium, Stadium::default());
    }

    #[test]
    fn level_aggression_is_idempotent() {
        let mut slot = blank_slot();
        for (i, player) in slot.players.iter_mut().enumerate() {
            player.aggression = (i % 10) as u8;
        }

        slot.level_aggression();
        assert!(slot.players.iter().all(|player| player.aggression == 5));
        let once = slot.clone();
        slot.level_aggression();
        assert_eq!(slot, once);
    }

    #[test]
    fn soup_up_follows_slot_positions() {
        let mut slot = managed_slot(40);
        let club = slot.clubs.get_mut(40).unwrap();
        club.player_index[0] = PlayerRef::from_raw(10);
        club.player_index[6] = PlayerRef::from_raw(11);
        club.player_index[13] = PlayerRef::from_raw(12);
        slot.players.get_mut(10).unwrap().morale = 1;

        slot.soup_up(0).unwrap();

        let skills = |idx: i32| {
            let p = slot.resolve_player(idx).unwrap();
            [p.handling, p.tackling, p.passing, p.shooting]
        };
        assert_eq!(skills(10), [99, 97, 97, 97]);
        assert_eq!(skills(11), [97, 97, 97, 99]);
        assert_eq!(skills(12), [97, 97, 99, 97]);
        for idx in 10..13 {
            let p = slot.resolve_player(idx).unwrap();
            assert_eq!((p.heading, p.control, p.fitness, p.morale), (99, 99, 99, 8));
        }
        // not on the roster
        assert_eq!(skills(13), [0; 4]);
    }

    #[test]
    fn soup_up_raises_hired_staff_only() {
        let mut slot = managed_slot(40);
        let employees = &mut slot.world.first_manager.employees;
        employees[0].name.set("COACH");
        employees[3].name.set("PHYSIO");
        employees[15].name.set("APPLICANT");

        slot.soup_up(0).unwrap();

        let skills: Vec<u8> = slot.world.first_manager.employees.iter().map(|e| e.skill).collect();
        assert_eq!(skills[0], 99);
        assert_eq!(skills[3], 99);
        assert_eq!(skills[1], 0);
        assert_eq!(skills[15], 0);
    }

    #[test]
    fn soup_up_with_dangling_roster_changes_nothing() {
        let mut slot = managed_slot(40);
        slot.world.first_manager.employees[0].name.set("COACH");
        let club = slot.clubs.get_mut(40).unwrap();
        club.player_index[0] = PlayerRef::from_raw(10);
        club.player_index[1] = PlayerRef::from_raw(9999);
        let before = slot.clone();

        assert!(matches!(slot.soup_up(0), Err(Error::PlayerIndexOutOfRange(9999))));
        assert_eq!(slot, before);
    }
}
