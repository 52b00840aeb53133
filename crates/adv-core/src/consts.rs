//! Game constants
//!
//! Defaults for [`GameConfig`](crate::GameConfig). Every value here can be
//! overridden from the rc file or the command line.

/// Number of rooms generated per run
pub const DEFAULT_ROOM_COUNT: usize = 7;

/// Minimum number of connections each room seeks during generation
pub const MIN_CONNECTIONS: usize = 3;

/// The most steps allowed before the game is lost
pub const MAX_PATH: usize = 14;

/// Prefix of the per-run room directory (`<prefix>.rooms.<pid>`)
pub const DEFAULT_DIR_PREFIX: &str = "adventure";

/// Candidate room names. Must hold at least as many names as rooms.
pub const ROOM_NAMES: [&str; 10] = [
    "Mozart",
    "Schubert",
    "Beethoven",
    "Bach",
    "Wagner",
    "Vivaldi",
    "Pachelbel",
    "Satie",
    "Berg",
    "Chopin",
];
