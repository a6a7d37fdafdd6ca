//! Finds contributor source files. Only the top level of the contributors
//! directory is searched and the listing is returned in whatever order the
//! file system yields it; sorting happens after parsing.

use std::fmt;
use std::fs::read_dir;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns the paths of the regular files in `dir` whose extension is
/// `extension`. A missing `dir` is not an error; it simply has no
/// contributors.
pub fn contributor_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = match read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %dir.display(), "contributors directory missing");
            return Ok(Vec::new());
        }
        Err(e) => return Err(Error::read_dir(dir, e)),
    };

    let mut files = Vec::new();
    for result in entries {
        let entry = result.map_err(|e| Error::read_dir(dir, e))?;
        let path = entry.path();
        if entry
            .file_type()
            .map_err(|e| Error::read_dir(dir, e))?
            .is_dir()
        {
            continue;
        }
        if path.extension().map_or(false, |ext| ext == extension) {
            files.push(path);
        }
    }
    Ok(files)
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for listing the contributors directory.
#[derive(Debug)]
pub enum Error {
    /// Returned when the directory exists but can't be listed.
    ReadDir { path: PathBuf, err: std::io::Error },
}

impl Error {
    fn read_dir(path: &Path, err: std::io::Error) -> Error {
        Error::ReadDir {
            path: path.to_owned(),
            err,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadDir { path, err } => {
                write!(f, "Listing directory '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadDir { path: _, err } => Some(err),
        }
    }
}
