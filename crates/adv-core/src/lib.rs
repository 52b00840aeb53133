//! adv-core: Room graph logic for the room adventure game
//!
//! This crate holds the room model, graph generation and the navigation
//! state machine. It performs no file I/O; persistence lives in `adv-save`.
//! Console I/O is limited to whatever `BufRead`/`Write` pair the caller
//! hands to [`NavigationEngine::play`].

pub mod config;
pub mod generation;
pub mod navigation;
pub mod room;

mod consts;
mod error;
mod rng;
mod store;

pub use config::GameConfig;
pub use consts::*;
pub use error::{ConfigError, GraphError};
pub use generation::generate_rooms;
pub use navigation::{NavState, NavigationEngine, Outcome, Path, StepResult};
pub use rng::GameRng;
pub use room::{Room, RoomId, RoomKind};
pub use store::RoomStore;
