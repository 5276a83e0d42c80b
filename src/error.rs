use std::path::PathBuf;

/// Errors raised by board construction and column queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("board must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidColumn {
            column: 9,
            width: 7,
        };
        assert_eq!(err.to_string(), "column 9 is outside the board (width 7)");

        let err = BoardError::Ragged {
            row: 2,
            expected: 7,
            found: 6,
        };
        assert_eq!(err.to_string(), "row 2 has 6 cells, expected 7");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("logging.level must be one of off, error".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: logging.level must be one of off, error"
        );
    }
}
