use std::path::PathBuf;

/// Failures that stop a puzzle (or the whole batch) from reaching the solver.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("unable to read puzzle file {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration on line {line}: {reason}")]
    MalformedConfiguration {
        line: usize,
        #[source]
        reason: ConfigError,
    },
}

/// Why a line of tiles is not a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("expected 16 tiles, found {0}")]
    WrongTileCount(usize),

    #[error("{0:?} is not a tile number")]
    NotANumber(String),

    #[error("tile {0} is outside 0..=15")]
    OutOfRange(u64),

    #[error("tile {0} appears more than once")]
    Duplicate(u8),

    #[error("line is not valid UTF-8")]
    NotText,
}
