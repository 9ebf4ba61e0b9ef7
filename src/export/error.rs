//! Export driver error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::render::RenderError;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while writing artifacts.
///
/// Filesystem failures are split by the operation that failed. The OS
/// cause, including permission problems, stays available through
/// [`std::error::Error::source`] and [`ExportError::io_kind`].
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    /// An artifact file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// An artifact could not be encoded.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ExportError {
    /// Get the path the failing operation targeted.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Render(_) => None,
        }
    }

    /// Get the underlying I/O error kind.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::CreateDir { source, .. } | Self::Write { source, .. } => Some(source.kind()),
            Self::Render(_) => None,
        }
    }

    /// Whether the failure was caused by missing permissions.
    pub fn is_permission_denied(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dir_error_carries_path() {
        let err = ExportError::CreateDir {
            path: PathBuf::from("/nope/out"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), Some(Path::new("/nope/out")));
        assert!(err.is_permission_denied());
        assert!(err.to_string().contains("/nope/out"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_write_error_kind() {
        let err = ExportError::Write {
            path: PathBuf::from("out/workflow-playbook.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(!err.is_permission_denied());
    }
}
