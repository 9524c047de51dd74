//! Unified error types for rotbreak.
//!
//! Only the CLI path can fail (reading the input file, validating
//! tunables); the cracking core is total over its inputs and signals
//! through labelled result lines instead of errors.

use std::fmt;

/// Central error type for rotbreak operations.
#[derive(Debug)]
pub enum RotbreakError {
    /// I/O errors (reading the input file).
    Io(std::io::Error),
    /// Invalid CLI arguments or tunable values.
    Config(String),
}

impl fmt::Display for RotbreakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotbreakError::Io(e) => write!(f, "I/O error: {}", e),
            RotbreakError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for RotbreakError {}

impl From<std::io::Error> for RotbreakError {
    fn from(e: std::io::Error) -> Self {
        RotbreakError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_category() {
        let err = RotbreakError::Config("bad flag".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad flag");

        let io = RotbreakError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(io.to_string().starts_with("I/O error:"));
    }
}
