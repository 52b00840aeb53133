//! Game configuration (rc file and defaults)
//!
//! The rc file uses one `OPTIONS=` line per group of `key:value` pairs and
//! an optional `NAMES=` line that replaces the room name pool:
//!
//! ```text
//! # ~/.adventurerc
//! OPTIONS=rooms:7,connections:3
//! OPTIONS=max_path:14,dir_prefix:mygame
//! NAMES=Mozart,Schubert,Beethoven,Bach,Wagner,Vivaldi,Pachelbel,Satie
//! ```

use std::path::Path;

use hashbrown::HashSet;

use crate::consts::{DEFAULT_DIR_PREFIX, DEFAULT_ROOM_COUNT, MAX_PATH, MIN_CONNECTIONS, ROOM_NAMES};
use crate::error::ConfigError;

/// Parameters for generating and playing one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rooms to generate
    pub room_count: usize,
    /// Connections each room seeks during generation
    pub min_connections: usize,
    /// Steps allowed before the game is lost
    pub max_path: usize,
    /// Candidate room names
    pub name_pool: Vec<String>,
    /// Prefix of the per-run room directory
    pub dir_prefix: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            min_connections: MIN_CONNECTIONS,
            max_path: MAX_PATH,
            name_pool: ROOM_NAMES.iter().map(|name| name.to_string()).collect(),
            dir_prefix: DEFAULT_DIR_PREFIX.to_string(),
        }
    }
}

impl GameConfig {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    config.parse_option(opt)?;
                }
            } else if let Some(names) = line.strip_prefix("NAMES=") {
                config.name_pool = names
                    .split(',')
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .collect();
            } else {
                return Err(ConfigError::UnknownOption(line.to_string()));
            }
        }

        Ok(config)
    }

    fn parse_option(&mut self, opt: &str) -> Result<(), ConfigError> {
        let (key, value) = match opt.split_once(':').or_else(|| opt.split_once('=')) {
            Some((key, value)) => (key.trim(), value.trim()),
            None => return Err(ConfigError::MissingValue(opt.to_string())),
        };

        match key {
            "rooms" | "room_count" => self.room_count = parse_count(key, value)?,
            "connections" | "min_connections" => self.min_connections = parse_count(key, value)?,
            "max_path" | "maxpath" => self.max_path = parse_count(key, value)?,
            "dir_prefix" | "prefix" => {
                if value.is_empty() {
                    return Err(ConfigError::MissingValue(key.to_string()));
                }
                self.dir_prefix = value.to_string();
            }
            _ => return Err(ConfigError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    /// Render as rc file text
    pub fn to_config_string(&self) -> String {
        format!(
            "OPTIONS=rooms:{},connections:{},max_path:{},dir_prefix:{}\nNAMES={}\n",
            self.room_count,
            self.min_connections,
            self.max_path,
            self.dir_prefix,
            self.name_pool.join(","),
        )
    }

    /// Check that a graph can be generated from these parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_count < 2 {
            return Err(ConfigError::TooFewRooms(self.room_count));
        }
        if self.min_connections == 0 {
            return Err(ConfigError::NoConnections);
        }
        if self.room_count > self.name_pool.len() {
            return Err(ConfigError::NamePoolTooSmall {
                rooms: self.room_count,
                pool: self.name_pool.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.name_pool.len());
        for name in &self.name_pool {
            // Names become file names and whitespace-separated tokens
            if name.is_empty()
                || name.chars().any(char::is_whitespace)
                || name.contains(['/', '\\'])
                || name == "."
                || name == ".."
            {
                return Err(ConfigError::InvalidName(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }
        Ok(())
    }
}

fn parse_count(option: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.room_count, 7);
        assert_eq!(config.min_connections, 3);
        assert_eq!(config.max_path, 14);
        assert_eq!(config.name_pool.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_options() {
        let config = GameConfig::parse_config(
            "# comment\n\nOPTIONS=rooms:5, connections:2\nOPTIONS=max_path=20,prefix:run\n",
        )
        .unwrap();
        assert_eq!(config.room_count, 5);
        assert_eq!(config.min_connections, 2);
        assert_eq!(config.max_path, 20);
        assert_eq!(config.dir_prefix, "run");
    }

    #[test]
    fn test_parse_names() {
        let config = GameConfig::parse_config("NAMES=Kitchen, Hall ,Cellar").unwrap();
        assert_eq!(config.name_pool, vec!["Kitchen", "Hall", "Cellar"]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            GameConfig::parse_config("OPTIONS=colour:red"),
            Err(ConfigError::UnknownOption("colour".to_string()))
        );
        assert_eq!(
            GameConfig::parse_config("OPTIONS=rooms:many"),
            Err(ConfigError::InvalidValue {
                option: "rooms".to_string(),
                value: "many".to_string()
            })
        );
        assert_eq!(
            GameConfig::parse_config("OPTIONS=rooms"),
            Err(ConfigError::MissingValue("rooms".to_string()))
        );
        assert!(GameConfig::parse_config("BIND=g:go").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let mut config = GameConfig::default();
        config.room_count = 4;
        config.dir_prefix = "tour".to_string();
        config.name_pool = vec!["A".into(), "B".into(), "C".into(), "D".into()];

        let parsed = GameConfig::parse_config(&config.to_config_string()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate() {
        let mut config = GameConfig::default();
        config.room_count = 1;
        assert_eq!(config.validate(), Err(ConfigError::TooFewRooms(1)));

        config.room_count = 11;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NamePoolTooSmall { rooms: 11, pool: 10 })
        );

        config.room_count = 2;
        config.min_connections = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoConnections));

        config.min_connections = 3;
        config.name_pool = vec!["Bach".into(), "Bach".into()];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateName("Bach".to_string()))
        );

        config.name_pool = vec!["Bach".into(), "Great Hall".into()];
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidName("Great Hall".to_string()))
        );
    }
}
