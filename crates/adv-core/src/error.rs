//! Error types for graph construction and configuration

use thiserror::Error;

/// Invalid generation or game parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("room count must be at least 2, got {0}")]
    TooFewRooms(usize),

    #[error("room count {rooms} exceeds the {pool} available room names")]
    NamePoolTooSmall { rooms: usize, pool: usize },

    #[error("room name '{0}' appears more than once in the name pool")]
    DuplicateName(String),

    #[error("room name '{0}' is not usable as a single-word file name")]
    InvalidName(String),

    #[error("minimum connection count must be at least 1")]
    NoConnections,

    #[error("could not read config file '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue { option: String, value: String },

    #[error("missing value for option '{0}'")]
    MissingValue(String),
}

/// Structural problems with a room graph that make it unplayable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("room graph has no rooms")]
    Empty,

    #[error("room graph has no START_ROOM")]
    NoStartRoom,

    #[error("room graph has {0} START_ROOM entries, expected exactly one")]
    MultipleStartRooms(usize),
}
