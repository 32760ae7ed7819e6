//! Game installation layout.

use crate::consts::*;
use crate::error::{Error, Result};
use crate::io;
use crate::metadata::{Prefs, SavesDir};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which release of the game is installed; decides where saves live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Standard,
    Deluxe,
}

impl Edition {
    /// Looks for the executable of each edition in `dir`, standard first.
    pub fn detect(dir: &Path) -> Result<Self> {
        if dir.join(STANDARD_EXE).exists() {
            Ok(Edition::Standard)
        } else if dir.join(DELUXE_EXE).exists() {
            Ok(Edition::Deluxe)
        } else {
            Err(Error::UnknownInstallation {
                dir: dir.to_path_buf(),
            })
        }
    }

    /// Saves subdirectory, relative to the installation directory.
    pub fn saves_dir_name(self) -> &'static str {
        match self {
            Edition::Standard => STANDARD_SAVES_DIR,
            Edition::Deluxe => DELUXE_SAVES_DIR,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edition::Standard => f.write_str("standard"),
            Edition::Deluxe => f.write_str("deluxe"),
        }
    }
}

/// A detected installation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    root: PathBuf,
    edition: Edition,
}

impl Installation {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let edition = Edition::detect(&root)?;
        info!(root = %root.display(), %edition, "found installation");
        Ok(Self { root, edition })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn saves_dir(&self) -> PathBuf {
        self.root.join(self.edition.saves_dir_name())
    }

    pub fn load_saves_dir(&self) -> Result<SavesDir> {
        io::load(&self.saves_dir().join(SAVES_DIR_FILE))
    }

    pub fn load_prefs(&self) -> Result<Prefs> {
        io::load(&self.saves_dir().join(PREFS_FILE))
    }

    /// Writes the slot directory, then the preferences.
    pub fn store_metadata(&self, saves: &SavesDir, prefs: &Prefs) -> Result<()> {
        let dir = self.saves_dir();
        io::store(&dir.join(SAVES_DIR_FILE), saves)?;
        io::store(&dir.join(PREFS_FILE), prefs)
    }
}
