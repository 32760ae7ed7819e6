//! One save-game slot: the world state, club table and player table that are
//! always loaded and stored together.

use crate::club::{Club, ClubDatabase};
use crate::consts::*;
use crate::error::{Error, Result};
use crate::io;
use crate::player::{Player, PlayerDatabase};
use crate::world::{Referee, WorldState};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Slot number as shown by the game, `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotNumber(u8);

impl SlotNumber {
    pub fn new(number: u8) -> Result<Self> {
        if (1..=SLOT_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(Error::InvalidSlot(number))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Position of this slot in the slot directory.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// `GAME<N>A`, `GAME<N>B` or `GAME<N>C`.
    pub fn file_name(self, part: char) -> String {
        format!("GAME{}{}", self.0, part)
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three records of one game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    pub world: WorldState,
    pub clubs: ClubDatabase,
    pub players: PlayerDatabase,
}

impl SaveSlot {
    /// Loads `GAME<N>A/B/C` from `saves_dir`. Nothing is returned unless all
    /// three files load completely.
    pub fn load(saves_dir: &Path, slot: SlotNumber) -> Result<Self> {
        let [world, clubs, players] = slot_paths(saves_dir, slot);
        let loaded = Self::from_files(&world, &clubs, &players)?;
        info!(%slot, year = loaded.world.year, turn = loaded.world.turn, "loaded save slot");
        Ok(loaded)
    }

    /// Loads the start-of-game database shipped in the installation directory.
    pub fn load_defaults(game_dir: &Path) -> Result<Self> {
        Self::from_files(
            &game_dir.join(DEFAULT_WORLD_FILE),
            &game_dir.join(DEFAULT_CLUBS_FILE),
            &game_dir.join(DEFAULT_PLAYERS_FILE),
        )
    }

    fn from_files(world: &Path, clubs: &Path, players: &Path) -> Result<Self> {
        let slot = Self {
            world: io::load(world)?,
            clubs: io::load(clubs)?,
            players: io::load(players)?,
        };
        for issue in slot.world.sanity_issues() {
            warn!(?issue, "unexpected value in world state");
        }
        Ok(slot)
    }

    /// Writes all three files of `slot` into `saves_dir`.
    pub fn store(&self, saves_dir: &Path, slot: SlotNumber) -> Result<()> {
        let [world, clubs, players] = slot_paths(saves_dir, slot);
        io::store(&world, &self.world)?;
        io::store(&clubs, &self.clubs)?;
        io::store(&players, &self.players)?;
        info!(%slot, "stored save slot");
        Ok(())
    }

    pub fn resolve_club(&self, idx: i32) -> Result<&Club> {
        self.clubs.get(idx)
    }

    pub fn resolve_player(&self, idx: i32) -> Result<&Player> {
        self.players.get(idx)
    }

    pub fn resolve_referee(&self, idx: i32) -> Result<&Referee> {
        usize::try_from(idx)
            .ok()
            .and_then(|i| self.world.referees.get(i))
            .ok_or(Error::RefereeIndexOutOfRange(idx))
    }
}

fn slot_paths(saves_dir: &Path, slot: SlotNumber) -> [PathBuf; 3] {
    ['A', 'B', 'C'].map(|part| saves_dir.join(slot.file_name(part)))
}
