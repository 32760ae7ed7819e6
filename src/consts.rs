pub const WORLD_STATE_SIZE: usize = 0x7372;
pub const CLUB_SIZE: usize = 0x023a;
pub const PLAYER_SIZE: usize = 0x0028;

/// Number of entries in the club table (`GAME<N>B`).
pub const CLUB_IDX_MAX: usize = 244;
/// Number of entries in the player table (`GAME<N>C`).
pub const PLAYER_COUNT: usize = 3932;
pub const REFEREE_COUNT: usize = 64;
pub const MANAGER_COUNT: usize = 2;

pub const ROSTER_SIZE: usize = 24;
pub const TIMETABLE_WEEKS: usize = 41;
pub const DAYS_PER_WEEK: usize = 3;

/// Employee slots per manager; the first [`STAFF_SLOTS`] are hired staff,
/// the rest are vacancies on offer.
pub const EMPLOYEE_SLOTS: usize = 20;
pub const STAFF_SLOTS: usize = 12;

pub const SLOT_COUNT: u8 = 8;

pub const NO_INDEX: i16 = -1;
pub const NO_OPPONENT: u8 = 0xff;
pub const UNPLAYED: u8 = 0xff;

/// Name left on a club whose manager has moved on.
pub const DEFAULT_MANAGER_NAME: &str = "J. SMITH";

pub const LEVELED_AGGRESSION: u8 = 5;
pub const SOUPED_STAFF_SKILL: u8 = 99;
pub const SOUPED_SKILL: u8 = 99;
pub const SOUPED_BASELINE: u8 = 97;
pub const SOUPED_MORALE: u8 = 8;

pub const STANDARD_EXE: &str = "PM3.EXE";
pub const DELUXE_EXE: &str = "PM3DELUX.EXE";
pub const STANDARD_SAVES_DIR: &str = "SAVES";
pub const DELUXE_SAVES_DIR: &str = "SAVESDLX";

pub const SAVES_DIR_FILE: &str = "SAVES.DIR";
pub const PREFS_FILE: &str = "PREFS";
pub const DEFAULT_WORLD_FILE: &str = "gamedata.dat";
pub const DEFAULT_CLUBS_FILE: &str = "clubdata.dat";
pub const DEFAULT_PLAYERS_FILE: &str = "playdata.dat";

pub const PREFS_SIZE: usize = 0x40;
