//! adv-save: Room file persistence for the room adventure game
//!
//! Each room is stored as its own text file named after the room:
//!
//! ```text
//! ROOM NAME: Bach
//! CONNECTION 1: Mozart
//! CONNECTION 2: Satie
//! ROOM TYPE: START_ROOM
//! ```
//!
//! Room ids do not survive a round trip. The reader numbers rooms in
//! directory enumeration order and resolves every connection by name.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use adv_core::GraphError;

mod read;
mod write;

pub use read::{LoadWarning, LoadedRooms, list_room_files, parse_room, read_rooms};
pub use write::{format_room, write_room, write_rooms};

/// Room file errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("error accessing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad room files in {}: {reason}", dir.display())]
    Format { dir: PathBuf, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SaveError::Io {
            path: path.into(),
            source,
        }
    }
}
