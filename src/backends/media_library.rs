// SPDX-License-Identifier: GPL-3.0-only

//! Media library capability
//!
//! Persists a captured photo into the user's photo library. The filesystem
//! implementation copies the capture into the library directory under a
//! timestamped name and never overwrites an existing photo.

use crate::backends::camera::{BackendError, BackendResult};
use crate::storage;
use std::future::Future;
use std::path::PathBuf;
use tracing::{debug, info};

/// Photo library the user saves to
pub trait MediaLibrary {
    /// Persist the photo behind `uri`
    ///
    /// # Returns
    /// * `Ok(String)` - uri of the stored copy
    /// * `Err(BackendError)` - the photo could not be stored
    fn persist(&mut self, uri: &str) -> impl Future<Output = BackendResult<String>>;
}

/// Library stored as a plain directory
#[derive(Debug, Clone)]
pub struct FilesystemLibrary {
    directory: PathBuf,
}

impl FilesystemLibrary {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }
}

impl MediaLibrary for FilesystemLibrary {
    async fn persist(&mut self, uri: &str) -> BackendResult<String> {
        let source = storage::uri_to_path(uri)
            .ok_or_else(|| BackendError::Other(format!("unsupported photo uri: {uri}")))?;

        if !tokio::fs::try_exists(&source).await? {
            return Err(BackendError::IoError(format!(
                "photo no longer exists: {}",
                source.display()
            )));
        }

        tokio::fs::create_dir_all(&self.directory).await?;
        let filename = storage::library_filename(chrono::Local::now());
        let target = storage::unique_path(&self.directory, &filename);

        debug!(from = %source.display(), to = %target.display(), "Copying photo into library");
        tokio::fs::copy(&source, &target).await?;

        info!(path = %target.display(), "Photo saved to library");
        Ok(storage::path_to_uri(&target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_persist_copies_into_library() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.jpg");
        std::fs::write(&capture, b"jpeg bytes").unwrap();

        let mut library = FilesystemLibrary::new(dir.path().join("library"));
        let stored = library
            .persist(&storage::path_to_uri(&capture))
            .await
            .unwrap();

        let stored_path = storage::uri_to_path(&stored).unwrap();
        assert!(stored_path.starts_with(library.directory()));
        assert_eq!(std::fs::read(stored_path).unwrap(), b"jpeg bytes");
        // Source stays in place for further saves
        assert!(capture.exists());
    }

    #[tokio::test]
    async fn test_saving_twice_keeps_both_copies() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.jpg");
        std::fs::write(&capture, b"jpeg bytes").unwrap();
        let uri = storage::path_to_uri(&capture);

        let mut library = FilesystemLibrary::new(dir.path().join("library"));
        let first = library.persist(&uri).await.unwrap();
        let second = library.persist(&uri).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read_dir(library.directory()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = FilesystemLibrary::new(dir.path().join("library"));
        let uri = storage::path_to_uri(&dir.path().join("gone.jpg"));
        assert!(library.persist(&uri).await.is_err());
    }

    #[tokio::test]
    async fn test_unsupported_uri_fails() {
        let mut library = FilesystemLibrary::new(PathBuf::from("/tmp/unused"));
        assert!(matches!(
            library.persist("content://media/1").await,
            Err(BackendError::Other(_))
        ));
    }
}
