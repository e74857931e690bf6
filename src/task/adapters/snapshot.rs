//! JSON snapshot file holding the persisted board between runs.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use thiserror::Error;

use crate::task::domain::BoardSnapshot;

/// Errors raised while reading or writing the snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotFileError {
    /// The path has no file name component.
    #[error("snapshot path {0} does not name a file")]
    InvalidPath(Utf8PathBuf),
    /// Filesystem access failed.
    #[error("snapshot I/O failed for {path}: {source}")]
    Io {
        /// Path that was accessed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file contents are not a valid board snapshot.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Snapshot file opened through a capability handle on its parent directory.
#[derive(Debug)]
pub struct SnapshotFile {
    dir: Dir,
    file_name: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl SnapshotFile {
    /// Opens the directory containing `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotFileError::InvalidPath`] when `path` has no file
    /// name, or [`SnapshotFileError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, SnapshotFileError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| SnapshotFileError::InvalidPath(path.to_path_buf()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let io_error = |source| SnapshotFileError::Io {
            path: parent.to_path_buf(),
            source,
        };
        Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(io_error)?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;

        Ok(Self {
            dir,
            file_name: Utf8PathBuf::from(file_name),
            path: path.to_path_buf(),
        })
    }

    /// Returns the full path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Reads the snapshot, returning `None` when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotFileError::Io`] on read failure or
    /// [`SnapshotFileError::Parse`] when the contents are malformed.
    pub fn load(&self) -> Result<Option<BoardSnapshot>, SnapshotFileError> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SnapshotFileError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| SnapshotFileError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Writes the snapshot, replacing the previous file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotFileError::Encode`] when serialisation fails or
    /// [`SnapshotFileError::Io`] when the write or rename fails.
    pub fn save(&self, snapshot: &BoardSnapshot) -> Result<(), SnapshotFileError> {
        let mut contents =
            serde_json::to_string_pretty(snapshot).map_err(SnapshotFileError::Encode)?;
        contents.push('\n');

        let staging = Utf8PathBuf::from(format!(".{}.tmp", self.file_name));
        let io_error = |source| SnapshotFileError::Io {
            path: self.path.clone(),
            source,
        };
        self.dir.write(&staging, contents).map_err(io_error)?;
        self.dir
            .rename(&staging, &self.dir, &self.file_name)
            .map_err(io_error)
    }
}
