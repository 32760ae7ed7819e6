//! Files shared by all slots: the slot directory (`SAVES.DIR`) and the
//! preferences blob (`PREFS`).

use crate::codec::{Opaque, Text, layout};
use crate::consts::*;
use crate::index::ClubRef;
use crate::slot::SlotNumber;
use crate::world::WorldState;
use tracing::debug;

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SaveManager {
        pub name: Text<16>,
        pub club: ClubRef,
    }
}

layout! {
    /// What the load menu shows for one slot.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SaveEntry {
        pub year: u16,
        pub turn: u16,
        pub managers: [SaveManager; MANAGER_COUNT],
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SavesDir {
        pub entries: [SaveEntry; SLOT_COUNT as usize],
    }
}

impl SavesDir {
    pub fn entry(&self, slot: SlotNumber) -> &SaveEntry {
        &self.entries[slot.index()]
    }

    /// Refreshes the entry of `slot` from the world state about to be saved.
    pub fn update_from(&mut self, slot: SlotNumber, world: &WorldState) {
        let entry = &mut self.entries[slot.index()];
        entry.year = world.year;
        entry.turn = world.turn;
        for (target, manager) in entry.managers.iter_mut().zip(world.managers()) {
            target.name = manager.name.terminated();
            target.club = manager.club;
        }
        debug!(%slot, year = entry.year, turn = entry.turn, "updated slot directory");
    }
}

layout! {
    /// Game preferences, kept verbatim.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Prefs {
        pub data: Opaque<PREFS_SIZE>,
    }
}
