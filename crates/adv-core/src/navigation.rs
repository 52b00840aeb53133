//! Navigation state machine and console game loop
//!
//! The player starts in the start room and names an adjacent room each
//! turn. Unknown or non-adjacent names cost nothing; each valid move is
//! recorded in the [`Path`]. The game is won on entering the end room and
//! lost once the path holds `max_path` moves.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::GraphError;
use crate::room::RoomId;
use crate::store::RoomStore;

pub const MSG_LOCATION: &str = "CURRENT LOCATION:";
pub const MSG_CONNECTIONS: &str = "POSSIBLE CONNECTIONS:";
pub const MSG_PROMPT: &str = "WHERE TO? >";
pub const MSG_HUH: &str = "HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.";
pub const MSG_FOUND: &str = "YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!";

/// Navigation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Still looking for the end room
    Seeking,
    /// Reached the end room
    Found,
    /// Ran out of moves
    Exhausted,
}

/// How a game finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Exhausted,
    /// Input ended before the game did
    Abandoned,
}

/// Result of trying to move to a named room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Moved into the room; it is now the current room
    Moved(RoomId),
    /// No room has that name
    Unknown,
    /// The room exists but is not an exit from here
    NotAdjacent(RoomId),
    /// The game is already over
    Finished(NavState),
}

/// Rooms visited so far, in order, excluding the start room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    rooms: Vec<RoomId>,
    limit: usize,
}

impl Path {
    /// The path grows as moves are made; `limit` may be arbitrarily large.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            rooms: Vec::new(),
            limit,
        }
    }

    /// Record a move; refused once the path is full
    pub fn push(&mut self, id: RoomId) -> bool {
        if self.is_full() {
            return false;
        }
        self.rooms.push(id);
        true
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_full(&self) -> bool {
        self.rooms.len() >= self.limit
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Visited room names in order
    pub fn names<'a>(&self, store: &'a RoomStore) -> Vec<&'a str> {
        self.rooms.iter().filter_map(|&id| store.name(id)).collect()
    }
}

/// Walks a read-only room graph on behalf of the player
#[derive(Debug, Clone)]
pub struct NavigationEngine<'a> {
    store: &'a RoomStore,
    current: RoomId,
    path: Path,
    state: NavState,
}

impl<'a> NavigationEngine<'a> {
    /// Position a new game at the graph's unique start room
    pub fn new(store: &'a RoomStore, max_path: usize) -> Result<Self, GraphError> {
        let start = store.start()?;
        let state = if max_path == 0 {
            NavState::Exhausted
        } else {
            NavState::Seeking
        };
        Ok(Self {
            store,
            current: start,
            path: Path::with_limit(max_path),
            state,
        })
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn current(&self) -> RoomId {
        self.current
    }

    pub fn current_name(&self) -> &'a str {
        self.store.name(self.current).unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_over(&self) -> bool {
        self.state != NavState::Seeking
    }

    /// Exits from the current room, in id order
    pub fn exits(&self) -> Vec<&'a str> {
        self.store.exit_names(self.current)
    }

    /// Try to move into the room called `input`
    pub fn attempt_move(&mut self, input: &str) -> StepResult {
        if self.is_over() {
            return StepResult::Finished(self.state);
        }

        let Some(target) = self.store.find(input) else {
            return StepResult::Unknown;
        };
        if !self.store[self.current].is_adjacent(target) {
            return StepResult::NotAdjacent(target);
        }

        self.current = target;
        self.path.push(target);
        debug!(room = input, steps = self.path.len(), "moved");

        if self.store[target].is_end() {
            self.state = NavState::Found;
        } else if self.path.is_full() {
            self.state = NavState::Exhausted;
        }
        StepResult::Moved(target)
    }

    /// Run the console loop until the game ends or `input` runs dry
    pub fn play<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<Outcome> {
        let mut line = String::new();

        while !self.is_over() {
            writeln!(output, "{} {}", MSG_LOCATION, self.current_name())?;
            writeln!(output, "{} {}.", MSG_CONNECTIONS, self.exits().join(", "))?;
            write!(output, "{}", MSG_PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                output.flush()?;
                debug!(steps = self.path.len(), "input closed mid-game");
                return Ok(Outcome::Abandoned);
            }
            let choice = line.trim_end_matches(['\n', '\r']);

            match self.attempt_move(choice) {
                StepResult::Moved(_) | StepResult::Finished(_) => {}
                StepResult::Unknown | StepResult::NotAdjacent(_) => {
                    writeln!(output, "\n{}", MSG_HUH)?;
                }
            }
            writeln!(output)?;
        }

        self.report(&mut output)?;
        output.flush()?;
        Ok(self.outcome())
    }

    fn outcome(&self) -> Outcome {
        match self.state {
            NavState::Found => Outcome::Found,
            NavState::Exhausted => Outcome::Exhausted,
            NavState::Seeking => Outcome::Abandoned,
        }
    }

    /// Print the end-of-game summary
    pub fn report<W: Write>(&self, output: &mut W) -> io::Result<()> {
        match self.state {
            NavState::Found => {
                let steps = self.path.len();
                let unit = if steps == 1 { "STEP" } else { "STEPS" };
                writeln!(output, "{}", MSG_FOUND)?;
                writeln!(output, "YOU TOOK {steps} {unit}. YOUR PATH TO VICTORY WAS:")?;
                for name in self.path.names(self.store) {
                    writeln!(output, "{name}")?;
                }
            }
            NavState::Exhausted => {
                writeln!(
                    output,
                    "YOU DIDN'T FIND THE END ROOM IN {} MOVES! SO SORRY.",
                    self.path.limit()
                )?;
            }
            NavState::Seeking => {}
        }
        Ok(())
    }
}
