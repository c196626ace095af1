use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Failure modes when reading the milestone dataset from disk.
#[derive(Debug)]
pub enum DataError {
    NotFound(PathBuf),
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::NotFound(path) => write!(f, "Data file {} not found", path.display()),
            DataError::Io(path, err) => {
                write!(f, "Failed to read data file {}: {}", path.display(), err)
            }
            DataError::Parse(path, err) => {
                write!(f, "Failed to parse data file {}: {}", path.display(), err)
            }
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataError::NotFound(_) => None,
            DataError::Io(_, err) => Some(err),
            DataError::Parse(_, err) => Some(err),
        }
    }
}
