use std::path::PathBuf;

/// Reasons a column selection is rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("column is off the board")]
    OutOfRange,

    #[error("column is full")]
    ColumnFull,

    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur when decoding a saved game.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("there was no game save to load")]
    Empty,

    #[error("malformed save data: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Malformed(err.to_string())
    }
}

/// Errors that can occur when reading or writing the save file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("save file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors from turning prompt text into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("nothing was entered")]
    Blank,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    ConflictingArgs(String),

    #[error("cannot use {name} argument with value less than one (got {value})")]
    NonPositiveDimension { name: &'static str, value: i64 },

    #[error("connect length {connect} makes for unwinnable game on a {width}x{height} board")]
    UnwinnableConfiguration {
        connect: usize,
        width: usize,
        height: usize,
    },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
