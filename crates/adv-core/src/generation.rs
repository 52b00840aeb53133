//! Room graph generation
//!
//! Builds a fresh graph in four passes:
//! 1. Draw distinct names from the pool
//! 2. Create every room as an ordinary room with no exits
//! 3. Pick a start room, then a different end room
//! 4. Give each room random two-way exits until it has enough
//!
//! Pass 4 never removes edges, so rooms visited later can push earlier
//! rooms above the minimum. Degrees are uneven on purpose.

use tracing::debug;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::rng::GameRng;
use crate::room::{Room, RoomId, RoomKind};
use crate::store::RoomStore;

/// Generate a room graph from `config`.
///
/// Every room ends with at least `min(min_connections, room_count - 1)`
/// exits, never connects to itself, and all connections are two-way.
pub fn generate_rooms(config: &GameConfig, rng: &mut GameRng) -> Result<RoomStore, ConfigError> {
    config.validate()?;

    let count = config.room_count;
    let names = pick_names(&config.name_pool, count, rng);

    let mut store = RoomStore::with_capacity(count);
    for name in names {
        store.push(Room::new(name))?;
    }

    let (start, end) = pick_start_and_end(count, rng);
    store.set_kind(start, RoomKind::Start);
    store.set_kind(end, RoomKind::End);

    connect_rooms(&mut store, config.min_connections, rng);

    debug!(
        seed = rng.seed(),
        rooms = store.len(),
        start = store.name(start),
        end = store.name(end),
        edges = store.iter().map(|(_, room)| room.degree()).sum::<usize>() / 2,
        "generated room graph"
    );

    Ok(store)
}

/// Draw `count` distinct names, rejecting indices already used
fn pick_names(pool: &[String], count: usize, rng: &mut GameRng) -> Vec<String> {
    let mut used = vec![false; pool.len()];
    let mut names = Vec::with_capacity(count);

    while names.len() < count {
        let idx = rng.rn2(pool.len());
        if used[idx] {
            continue;
        }
        used[idx] = true;
        names.push(pool[idx].clone());
    }

    names
}

fn pick_start_and_end(count: usize, rng: &mut GameRng) -> (RoomId, RoomId) {
    let start = rng.rn2(count);
    // count >= 2, so another index always exists
    let end = rng.rn2_except(count, start).unwrap_or((start + 1) % count);
    (RoomId(start), RoomId(end))
}

/// Give each room random exits until it reaches the target degree
fn connect_rooms(store: &mut RoomStore, min_connections: usize, rng: &mut GameRng) {
    let count = store.len();
    let target = min_connections.min(count.saturating_sub(1));

    for i in 0..count {
        let id = RoomId(i);
        while store[id].degree() < target {
            let Some(other) = rng.rn2_except(count, i) else {
                break;
            };
            store.connect(id, RoomId(other));
        }
    }
}
