use std::error::Error;
use std::fmt;
use std::io;

use crate::markdown::toc::InspectionError;

/// Common result type for table of contents operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for table of contents operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Heading inspection error
    Inspection(InspectionError),
    /// Output serialization error
    Output(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::Inspection(err) => write!(f, "Inspection error: {}", err),
            TocError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            TocError::Inspection(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<InspectionError> for TocError {
    fn from(err: InspectionError) -> Self {
        TocError::Inspection(err)
    }
}
