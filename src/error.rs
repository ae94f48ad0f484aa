//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Carries the two conversion failures (`InvalidNumeral`, `InvalidValue`), wraps
//! them with a line number when they surface while scanning a list, and converts
//! underlying I/O and JSON errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid Roman numeral {numeral:?}: unmatched input at position {position}")]
    InvalidNumeral { numeral: String, position: usize },

    #[error(
        "Invalid value {value}: expected 1..={max}",
        max = crate::core::encode::MAX_VALUE
    )]
    InvalidValue { value: i64 },

    #[error("Line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_numeral(numeral: &str, position: usize) -> Self {
        Error::InvalidNumeral {
            numeral: numeral.to_string(),
            position,
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        Error::Line {
            line,
            source: Box::new(self),
        }
    }

    /// True for the conversion failures a caller may choose to skip over.
    pub fn is_conversion(&self) -> bool {
        match self {
            Error::InvalidNumeral { .. } | Error::InvalidValue { .. } => true,
            Error::Line { source, .. } => source.is_conversion(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_wraps_source_message() {
        let err = Error::invalid_numeral("ABC", 0).at_line(7);
        assert_eq!(
            err.to_string(),
            "Line 7: Invalid Roman numeral \"ABC\": unmatched input at position 0"
        );
        assert!(err.is_conversion());
    }

    #[test]
    fn io_error_is_not_a_conversion_failure() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_conversion());
    }
}
