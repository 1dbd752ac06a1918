use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to traverse '{path}': {source}")]
    WalkError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl IoError {
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            return Self::PermissionDenied { path };
        }
        Self::ReadError { path, source }
    }

    pub fn walk_error(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        let path = path.into();
        let denied = source
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied);
        if denied {
            return Self::PermissionDenied { path };
        }
        Self::WalkError { path, source }
    }
}
