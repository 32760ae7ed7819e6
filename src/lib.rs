//! Decoder/Encoder and editor for Premier Manager 3 save games.
//!
//! A save slot consists of three fixed-size files: the world state
//! (`GAME<N>A`), the club table (`GAME<N>B`) and the player table
//! (`GAME<N>C`). [`SaveSlot::load`] reads all three into typed records that
//! encode back to the exact same bytes, unknown ranges included.
//!
//! ```no_run
//! use pm3save::{Installation, SaveSlot, SlotNumber};
//!
//! # fn main() -> pm3save::Result<()> {
//! let install = Installation::open("C:/PM3")?;
//! let number = SlotNumber::new(1)?;
//! let mut slot = SaveSlot::load(&install.saves_dir(), number)?;
//!
//! for free in slot.find_free_players()? {
//!     println!("{} ({})", free.player.name, free.club.name);
//! }
//!
//! slot.level_aggression();
//! slot.store(&install.saves_dir(), number)?;
//! # Ok(())
//! # }
//! ```

pub mod club;
pub mod codec;
pub mod consts;
pub mod edit;
mod error;
pub mod index;
pub mod install;
pub mod io;
pub mod metadata;
pub mod player;
pub mod query;
pub mod slot;
pub mod world;

pub use club::{Club, ClubDatabase};
pub use error::{Error, Result};
pub use install::{Edition, Installation};
pub use metadata::{Prefs, SavesDir};
pub use player::{Player, PlayerDatabase, PlayerKind};
pub use query::{ClubPlayer, ConsistencyReport};
pub use slot::{SaveSlot, SlotNumber};
pub use world::{Manager, WorldState};
