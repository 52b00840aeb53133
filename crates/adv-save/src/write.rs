//! Room file writer

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use adv_core::{RoomId, RoomStore};

use crate::SaveError;

/// Render one room record. Connections are listed in id order.
pub fn format_room(store: &RoomStore, id: RoomId) -> String {
    let room = &store[id];

    let mut lines = vec![format!("ROOM NAME: {}", room.name)];
    lines.extend(
        store
            .exit_names(id)
            .into_iter()
            .enumerate()
            .map(|(n, name)| format!("CONNECTION {}: {}", n + 1, name)),
    );
    lines.push(format!("ROOM TYPE: {}", room.kind));

    lines.join("\n") + "\n"
}

/// Write one room to `dir/<room name>`
pub fn write_room(store: &RoomStore, id: RoomId, dir: &Path) -> Result<PathBuf, SaveError> {
    let path = dir.join(&store[id].name);
    fs::write(&path, format_room(store, id)).map_err(|e| SaveError::io(&path, e))?;
    Ok(path)
}

/// Write every room into `dir`, creating it if needed
pub fn write_rooms(store: &RoomStore, dir: &Path) -> Result<Vec<PathBuf>, SaveError> {
    fs::create_dir_all(dir).map_err(|e| SaveError::io(dir, e))?;

    let paths = store
        .ids()
        .map(|id| write_room(store, id, dir))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(dir = %dir.display(), files = paths.len(), "wrote room files");
    Ok(paths)
}
