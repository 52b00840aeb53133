//! Room model
//!
//! A room is a named node in the adventure graph with a set of exits to
//! other rooms and a kind (start, end or ordinary).

use std::collections::BTreeSet;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Position of a room inside one [`RoomStore`](crate::RoomStore).
///
/// Ids are only meaningful for the store that produced them. A graph that
/// has been written to disk and read back gets fresh ids in directory
/// enumeration order, so ids never cross the persistence boundary; room
/// names do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Room classification, spelled the way the room files spell it
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum RoomKind {
    /// Where the player starts
    #[strum(serialize = "START_ROOM")]
    Start,
    /// The goal
    #[strum(serialize = "END_ROOM")]
    End,
    /// Everything in between
    #[default]
    #[strum(serialize = "MID_ROOM")]
    Mid,
}

/// A single room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    /// Exits, ordered by id so listings are stable
    pub adjacent: BTreeSet<RoomId>,
    pub kind: RoomKind,
}

impl Room {
    /// Create an ordinary room with no exits
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjacent: BTreeSet::new(),
            kind: RoomKind::Mid,
        }
    }

    pub fn with_kind(mut self, kind: RoomKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_adjacent(&self, other: RoomId) -> bool {
        self.adjacent.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_start(&self) -> bool {
        self.kind == RoomKind::Start
    }

    pub fn is_end(&self) -> bool {
        self.kind == RoomKind::End
    }
}
