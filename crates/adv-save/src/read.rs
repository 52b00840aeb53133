//! Room file reader
//!
//! Reading is lenient: anything that still leaves a playable graph is
//! reported as a [`LoadWarning`] instead of failing the load.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use adv_core::{Room, RoomId, RoomKind, RoomStore};

use crate::SaveError;

/// Non-fatal problems found while reading room files
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    #[error("room '{room}' connects to '{target}', which has no room file")]
    UnresolvedConnection { room: String, target: String },

    #[error("room '{room}' has no ROOM TYPE line, treating it as MID_ROOM")]
    MissingType { room: String },

    #[error("room '{room}' has unknown type '{value}', treating it as MID_ROOM")]
    UnknownType { room: String, value: String },

    #[error("room file '{file}' has no ROOM NAME line, using the file name")]
    MissingName { file: String },

    #[error("expected {expected} room files, found {found}")]
    RoomCountMismatch { expected: usize, found: usize },

    #[error("no END_ROOM found, the game cannot be won")]
    NoEndRoom,

    #[error("room file '{file}' is not valid UTF-8, bad bytes were replaced")]
    InvalidUtf8 { file: String },
}

/// A reloaded graph and whatever was wrong with it
#[derive(Debug, Clone)]
pub struct LoadedRooms {
    pub store: RoomStore,
    pub warnings: Vec<LoadWarning>,
}

/// Names of the regular files in `dir`, in enumeration order.
///
/// Subdirectories, sockets and names that are not valid UTF-8 are skipped.
pub fn list_room_files(dir: &Path) -> Result<Vec<String>, SaveError> {
    let entries = fs::read_dir(dir).map_err(|e| SaveError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SaveError::io(dir, e))?;
        let path = entry.path();
        // Follow symlinks, like stat(2)
        let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(file = ?raw, "skipping non UTF-8 file name"),
        }
    }

    Ok(names)
}

/// Parse one room record.
///
/// Connections are resolved against `files`, the enumerated room file
/// names; a connection's id is the position of its file in that list.
pub fn parse_room(
    contents: &str,
    file: &str,
    files: &[String],
    warnings: &mut Vec<LoadWarning>,
) -> Room {
    let mut name = None;
    let mut kind = None;
    let mut connections = Vec::new();

    for line in contents.lines() {
        let mut tokens = line.split_whitespace();
        let (Some(first), Some(second), Some(third)) = (tokens.next(), tokens.next(), tokens.next())
        else {
            continue;
        };

        match first {
            "ROOM" if second.starts_with("NAME") => name = Some(third.to_string()),
            "ROOM" if second.starts_with("TYPE") => kind = Some(third.to_string()),
            "CONNECTION" => connections.push(third),
            _ => {}
        }
    }

    let name = name.unwrap_or_else(|| {
        warnings.push(LoadWarning::MissingName {
            file: file.to_string(),
        });
        file.to_string()
    });

    let kind = match kind {
        Some(value) => RoomKind::from_str(&value).unwrap_or_else(|_| {
            warnings.push(LoadWarning::UnknownType {
                room: name.clone(),
                value,
            });
            RoomKind::Mid
        }),
        None => {
            warnings.push(LoadWarning::MissingType { room: name.clone() });
            RoomKind::Mid
        }
    };

    let mut room = Room::new(name).with_kind(kind);
    for target in connections {
        match files.iter().position(|f| f == target) {
            Some(idx) => {
                room.adjacent.insert(RoomId(idx));
            }
            None => warnings.push(LoadWarning::UnresolvedConnection {
                room: room.name.clone(),
                target: target.to_string(),
            }),
        }
    }

    room
}

/// Read every room file in `dir` into a new store.
///
/// Rooms get ids in directory enumeration order. `expected` is the number
/// of rooms the caller wrote, if known.
pub fn read_rooms(dir: &Path, expected: Option<usize>) -> Result<LoadedRooms, SaveError> {
    let files = list_room_files(dir)?;
    if files.is_empty() {
        return Err(SaveError::Format {
            dir: dir.to_path_buf(),
            reason: "no room files".to_string(),
        });
    }

    let mut warnings = Vec::new();
    if let Some(expected) = expected.filter(|&n| n != files.len()) {
        warnings.push(LoadWarning::RoomCountMismatch {
            expected,
            found: files.len(),
        });
    }

    let mut store = RoomStore::with_capacity(files.len());
    for file in &files {
        let path = dir.join(file);
        let bytes = fs::read(&path).map_err(|e| SaveError::io(&path, e))?;
        let contents = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = contents {
            warnings.push(LoadWarning::InvalidUtf8 { file: file.clone() });
        }

        let room = parse_room(&contents, file, &files, &mut warnings);
        // Ids follow file order, so an earlier id names the earlier file
        if let Some(earlier) = store.find(&room.name) {
            return Err(SaveError::Format {
                dir: dir.to_path_buf(),
                reason: format!(
                    "room files '{}' and '{}' are both named '{}'",
                    files[earlier.index()],
                    file,
                    room.name
                ),
            });
        }
        store.push(room).map_err(|e| SaveError::Format {
            dir: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    store.start()?;
    if store.first_of_kind(RoomKind::End).is_none() {
        warnings.push(LoadWarning::NoEndRoom);
    }

    for warning in &warnings {
        warn!(dir = %dir.display(), "{warning}");
    }
    debug!(
        dir = %dir.display(),
        rooms = store.len(),
        warnings = warnings.len(),
        "read room files"
    );

    Ok(LoadedRooms { store, warnings })
}
