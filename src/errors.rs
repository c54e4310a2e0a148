use std::fmt;
use std::io;

use crate::config::ConfigError;

/// Which kind of index an [`OutOfRange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Section,
    Row,
}

/// A section or row index outside the bounds the model currently reports.
///
/// The list view only ever asks for indices derived from the model's own
/// counts, so this always indicates a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub kind: IndexKind,
    pub index: usize,
    pub len: usize,
}

impl OutOfRange {
    pub fn section(index: usize, len: usize) -> Self {
        Self {
            kind: IndexKind::Section,
            index,
            len,
        }
    }

    pub fn row(index: usize, len: usize) -> Self {
        Self {
            kind: IndexKind::Row,
            index,
            len,
        }
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            IndexKind::Section => "section",
            IndexKind::Row => "row",
        };
        write!(
            f,
            "{} index {} out of range (count is {})",
            kind, self.index, self.len
        )
    }
}

#[derive(Debug)]
pub enum SectionedError {
    IoError(io::Error),
    ConfigError(ConfigError),
    /// The log filter environment variable could not be parsed.
    LogFilterError(String),
    OutOfRange(OutOfRange),
    /// The row table was not reloaded after the model changed.
    InconsistentRowCount {
        section: usize,
        cached: usize,
        actual: usize,
    },
}

impl From<io::Error> for SectionedError {
    fn from(error: io::Error) -> Self {
        SectionedError::IoError(error)
    }
}

impl From<ConfigError> for SectionedError {
    fn from(error: ConfigError) -> Self {
        SectionedError::ConfigError(error)
    }
}

impl From<OutOfRange> for SectionedError {
    fn from(error: OutOfRange) -> Self {
        SectionedError::OutOfRange(error)
    }
}

impl fmt::Display for SectionedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionedError::IoError(e) => write!(f, "I/O error: {}", e),
            SectionedError::ConfigError(e) => write!(f, "Config error: {}", e),
            SectionedError::LogFilterError(e) => write!(f, "Invalid log filter: {}", e),
            SectionedError::OutOfRange(e) => write!(f, "Out of range: {}", e),
            SectionedError::InconsistentRowCount {
                section,
                cached,
                actual,
            } => write!(
                f,
                "Invalid number of rows in section {}: the list shows {} rows but the model reports {}",
                section, cached, actual
            ),
        }
    }
}

impl std::error::Error for SectionedError {}

pub type SectionedResult<T> = Result<T, SectionedError>;
