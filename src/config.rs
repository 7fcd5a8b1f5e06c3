use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};

/// Board settings used when the command line does not give them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameDefaults {
    pub width: usize,
    pub height: usize,
    pub connect: usize,
}

impl Default for GameDefaults {
    fn default() -> Self {
        GameDefaults {
            width: DEFAULT_COLUMNS,
            height: DEFAULT_ROWS,
            connect: DEFAULT_WIN_LENGTH,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub save_file: PathBuf,
    /// Where tracing output goes. No logging when unset.
    pub log_file: Option<PathBuf>,
    pub game: GameDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            save_file: PathBuf::from("save_file.json"),
            log_file: None,
            game: GameDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let game = &self.game;
        positive("game.width", game.width as i64)?;
        positive("game.height", game.height as i64)?;
        positive("game.connect", game.connect as i64)?;
        check_winnable(game.width, game.height, game.connect)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

/// Board options as given on the command line, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub square: Option<i64>,
    pub connect: Option<i64>,
    pub load: bool,
}

/// What the app should start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    New {
        columns: usize,
        rows: usize,
        win_length: usize,
    },
    /// Continue the game in the save file.
    Resume,
}

impl LaunchArgs {
    pub fn resolve(&self, defaults: &GameDefaults) -> Result<Launch, ConfigError> {
        let sizing = self.width.is_some() || self.height.is_some();

        if self.load {
            if sizing || self.square.is_some() || self.connect.is_some() {
                return Err(ConfigError::ConflictingArgs(
                    "cannot load a game and set parameters".into(),
                ));
            }
            return Ok(Launch::Resume);
        }

        let (columns, rows) = match self.square {
            Some(_) if sizing => {
                return Err(ConfigError::ConflictingArgs(
                    "cannot set square and width/height".into(),
                ));
            }
            Some(square) => {
                let side = positive("square", square)?;
                (side, side)
            }
            None => (
                self.width
                    .map(|w| positive("width", w))
                    .transpose()?
                    .unwrap_or(defaults.width),
                self.height
                    .map(|h| positive("height", h))
                    .transpose()?
                    .unwrap_or(defaults.height),
            ),
        };
        let win_length = self
            .connect
            .map(|c| positive("connect", c))
            .transpose()?
            .unwrap_or(defaults.connect);

        check_winnable(columns, rows, win_length)?;
        Ok(Launch::New {
            columns,
            rows,
            win_length,
        })
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value)
        .ok()
        .filter(|&v| v >= 1)
        .ok_or(ConfigError::NonPositiveDimension { name, value })
}

fn check_winnable(width: usize, height: usize, connect: usize) -> Result<(), ConfigError> {
    if width < connect && height < connect {
        return Err(ConfigError::UnwinnableConfiguration {
            connect,
            width,
            height,
        });
    }
    Ok(())
}
