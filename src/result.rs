use std::convert::From;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub(crate) enum SweepError {
    StdIoError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    FailedOperation(&'static str),
    RemovalFailed(PathBuf, std::io::Error),
    RefusedTarget(PathBuf, &'static str),
}

impl From<std::io::Error> for SweepError {
    fn from(error: std::io::Error) -> SweepError {
        SweepError::StdIoError(error)
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(error: serde_json::Error) -> SweepError {
        SweepError::SerdeJsonError(error)
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::StdIoError(error) => write!(f, "{}", error),
            SweepError::SerdeJsonError(error) => write!(f, "{}", error),
            SweepError::FailedOperation(message) => write!(f, "{}", message),
            SweepError::RemovalFailed(path, cause) => {
                write!(f, "Failed to remove directory {}: {}", path.display(), cause)
            }
            SweepError::RefusedTarget(path, reason) => {
                write!(f, "Refusing to remove {}: {}", path.display(), reason)
            }
        }
    }
}

pub(crate) type Result<T> = std::result::Result<T, SweepError>;
