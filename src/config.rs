//! Game configuration
//!
//! A [`GameConfig`] says how big the board is, who plays each side and how
//! the agents search. It can be stored as YAML and overridden from the
//! command line through [`GameArgs`].
//!
//! ```yaml
//! board_size: 10
//! x: human
//! o: alpha_beta
//! search_depth: 2
//! line_scan: vertical_only
//! ```

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::board::{Stone, MAX_BOARD_SIZE};
use crate::engine::AgentKind;
use crate::error::{GomokuError, Result};
use crate::eval::{EvalConfig, LineScan};

/// Checks a configuration before it is used
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Who controls a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerKind {
    Human,
    Agent(AgentKind),
}

impl PlayerKind {
    pub fn is_human(self) -> bool {
        matches!(self, PlayerKind::Human)
    }

    pub fn agent(self) -> Option<AgentKind> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Agent(kind) => Some(kind),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerKind::Human => "human",
            PlayerKind::Agent(AgentKind::Minimax) => "minimax",
            PlayerKind::Agent(AgentKind::AlphaBeta) => "alpha_beta",
            PlayerKind::Agent(AgentKind::Random) => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for PlayerKind {
    type Err = GomokuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "human" => Ok(PlayerKind::Human),
            "minimax" => Ok(PlayerKind::Agent(AgentKind::Minimax)),
            "alpha_beta" | "alphabeta" => Ok(PlayerKind::Agent(AgentKind::AlphaBeta)),
            "random" => Ok(PlayerKind::Agent(AgentKind::Random)),
            _ => Err(GomokuError::malformed(
                s,
                "expected one of human, minimax, alpha_beta, random",
            )),
        }
    }
}

impl TryFrom<String> for PlayerKind {
    type Error = GomokuError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PlayerKind> for String {
    fn from(kind: PlayerKind) -> Self {
        kind.to_string()
    }
}

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub x: PlayerKind,
    pub o: PlayerKind,
    pub search_depth: u8,
    pub line_scan: LineScan,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 10,
            x: PlayerKind::Human,
            o: PlayerKind::Agent(AgentKind::AlphaBeta),
            search_depth: 2,
            line_scan: LineScan::VerticalOnly,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a YAML file. A missing file yields the
    /// default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GomokuError::Io {
                    operation: format!("read config file {}", path.display()),
                    source,
                })
            }
        };

        let config: GameConfig = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as YAML
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_yaml_ng::to_string(self)?;
        std::fs::write(path, content).map_err(|source| GomokuError::Io {
            operation: format!("write config file {}", path.display()),
            source,
        })
    }

    pub fn player(&self, stone: Stone) -> PlayerKind {
        match stone {
            Stone::O => self.o,
            _ => self.x,
        }
    }

    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig::new(self.line_scan)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GomokuError::InvalidConfig {
                message: format!(
                    "board_size must be between 1 and {}, got {}",
                    MAX_BOARD_SIZE, self.board_size
                ),
            });
        }
        if self.search_depth == 0 {
            return Err(GomokuError::InvalidConfig {
                message: "search_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Command-line options shared by both binaries
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size (1-32)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Search depth for agents
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Player for X: human, minimax, alpha_beta or random
    #[arg(long)]
    pub x: Option<PlayerKind>,

    /// Player for O: human, minimax, alpha_beta or random
    #[arg(long)]
    pub o: Option<PlayerKind>,

    /// Grade runs in every direction instead of columns only
    #[arg(long)]
    pub all_directions: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl GameArgs {
    /// Load the configured file (if any) and apply flag overrides
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if let Some(x) = self.x {
            config.x = x;
        }
        if let Some(o) = self.o {
            config.o = o;
        }
        if self.all_directions {
            config.line_scan = LineScan::AllDirections;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args() -> GameArgs {
        GameArgs {
            config: None,
            size: None,
            depth: None,
            x: None,
            o: None,
            all_directions: false,
            log_level: log::LevelFilter::Info,
        }
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 10);
        assert!(config.x.is_human());
        assert_eq!(config.o.agent(), Some(AgentKind::AlphaBeta));
        assert_eq!(config.search_depth, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_kind_parse() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!(
            "Alpha-Beta".parse::<PlayerKind>().unwrap(),
            PlayerKind::Agent(AgentKind::AlphaBeta)
        );
        assert!("robot".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GameConfig { board_size: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(GomokuError::InvalidConfig { .. })));

        let config = GameConfig { board_size: 33, ..GameConfig::default() };
        assert!(config.validate().is_err());

        let config = GameConfig { search_depth: 0, ..GameConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = GameConfig::load(&dir.path().join("missing.yaml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        let config = GameConfig {
            board_size: 15,
            x: PlayerKind::Agent(AgentKind::Random),
            o: PlayerKind::Human,
            search_depth: 3,
            line_scan: LineScan::AllDirections,
        };
        config.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("x: random"));
        assert!(text.contains("line_scan: all_directions"));
        assert_eq!(GameConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        std::fs::write(&path, "board_size: 7\no: minimax\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.o, PlayerKind::Agent(AgentKind::Minimax));
        assert_eq!(config.search_depth, 2);
    }

    #[test]
    fn test_invalid_yaml_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        std::fs::write(&path, "board_size: [1, 2").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(GomokuError::ConfigFormat(_))));
    }

    #[test]
    fn test_invalid_values_in_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        std::fs::write(&path, "board_size: 64\n").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(GomokuError::InvalidConfig { .. })));
    }

    #[test]
    fn test_args_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.yaml");
        std::fs::write(&path, "board_size: 7\nsearch_depth: 3\n").unwrap();

        let args = GameArgs {
            config: Some(path),
            depth: Some(1),
            x: Some(PlayerKind::Agent(AgentKind::Minimax)),
            all_directions: true,
            ..args()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.search_depth, 1);
        assert_eq!(config.x, PlayerKind::Agent(AgentKind::Minimax));
        assert_eq!(config.line_scan, LineScan::AllDirections);
    }

    #[test]
    fn test_args_validate_overrides() {
        let args = GameArgs { size: Some(40), ..args() };
        assert!(args.resolve().is_err());
    }
}
