// SPDX-License-Identifier: GPL-3.0-only

//! Storage utilities for captured and saved photos

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

const URI_SCHEME: &str = "file://";

/// Default directory for photos saved to the library
pub fn default_library_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            Path::new(&home).join("Pictures")
        })
        .join(crate::constants::APP_DIR_NAME)
}

/// Default directory for captures awaiting review
///
/// Captures are transient, so they live in the cache directory.
pub fn default_capture_directory() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(crate::constants::APP_DIR_NAME)
        .join("captures")
}

/// Convert a path to a `file://` uri
pub fn path_to_uri(path: &Path) -> String {
    format!("{}{}", URI_SCHEME, path.display())
}

/// Resolve a `file://` uri (or a bare absolute path) to a path
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let path = uri.strip_prefix(URI_SCHEME).unwrap_or(uri);
    if path.is_empty() || !Path::new(path).is_absolute() {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Library filename for a photo taken at `timestamp`
pub fn library_filename(timestamp: DateTime<Local>) -> String {
    format!("IMG_{}.jpg", timestamp.format("%Y%m%d_%H%M%S"))
}

/// First path in `dir` for `filename` that does not exist yet
///
/// `IMG_x.jpg` becomes `IMG_x_1.jpg`, `IMG_x_2.jpg`, ... on collision.
pub fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    let ext = Path::new(filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1u32..)
        .map(|n| dir.join(format!("{stem}_{n}{ext}")))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_uri_round_trip_for_absolute_path() {
        let uri = path_to_uri(Path::new("/tmp/a.jpg"));
        assert_eq!(uri, "file:///tmp/a.jpg");
        assert_eq!(uri_to_path(&uri), Some(PathBuf::from("/tmp/a.jpg")));
    }

    #[test]
    fn test_relative_and_empty_uris_rejected() {
        assert_eq!(uri_to_path("file://"), None);
        assert_eq!(uri_to_path("file://relative.jpg"), None);
        assert_eq!(uri_to_path("/abs/photo.jpg"), Some(PathBuf::from("/abs/photo.jpg")));
    }

    #[test]
    fn test_library_filename_format() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(library_filename(ts), "IMG_20240309_140507.jpg");
    }

    #[test]
    fn test_unique_path_appends_counter() {
        let dir = tempfile::tempdir().unwrap();
        let first = unique_path(dir.path(), "IMG_1.jpg");
        assert_eq!(first, dir.path().join("IMG_1.jpg"));

        std::fs::write(&first, b"x").unwrap();
        std::fs::write(dir.path().join("IMG_1_1.jpg"), b"x").unwrap();
        assert_eq!(
            unique_path(dir.path(), "IMG_1.jpg"),
            dir.path().join("IMG_1_2.jpg")
        );
    }
}
