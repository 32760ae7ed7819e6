//! Error types for save-game access and editing.

use crate::codec::{DecodeError, EncodeError};
use std::path::PathBuf;
use thiserror::Error;

/// Every failure is final for the operation that raised it: the in-memory
/// records are left as they were and nothing is written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("short read on {}: expected {expected} bytes, got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("club index out of range: {0}")]
    ClubIndexOutOfRange(i32),

    #[error("player index out of range: {0}")]
    PlayerIndexOutOfRange(i32),

    #[error("referee index out of range: {0}")]
    RefereeIndexOutOfRange(i32),

    #[error("unrecognized club: {0}")]
    UnrecognizedClub(i32),

    #[error("invalid save slot: {0}")]
    InvalidSlot(u8),

    #[error("invalid manager: {0}")]
    InvalidManager(usize),

    #[error("unknown installation in {}", dir.display())]
    UnknownInstallation { dir: PathBuf },
}

/// Result type alias for save-game operations
pub type Result<T> = std::result::Result<T, Error>;
