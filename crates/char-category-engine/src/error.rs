use thiserror::Error;

use crate::category::UnknownCategory;

/// What was wrong with a definition line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatCause {
    #[error("invalid format, expected a code point followed by categories")]
    TooFewFields,
    #[error("malformed code point literal {0:?}")]
    MalformedLiteral(String),
    #[error("invalid range 0x{low:04X}..0x{high:04X}")]
    InvertedRange { low: u32, high: u32 },
    #[error("{0} is outside the Unicode code point range")]
    CodePointOutOfRange(String),
    #[error("{0} is invalid type")]
    UnknownCategory(String),
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl From<UnknownCategory> for FormatCause {
    fn from(err: UnknownCategory) -> Self {
        FormatCause::UnknownCategory(err.0)
    }
}

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("{cause} at line {line}")]
    Format { line: usize, cause: FormatCause },

    #[error("Failed to open character definition {locator}: {source}")]
    Open {
        locator: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CategoryError {
    pub(crate) fn format(line: usize, cause: FormatCause) -> Self {
        CategoryError::Format { line, cause }
    }

    /// The 1-based definition line a format error refers to.
    pub fn line(&self) -> Option<usize> {
        match self {
            CategoryError::Format { line, .. } => Some(*line),
            CategoryError::Open { .. } | CategoryError::Io(_) => None,
        }
    }
}
