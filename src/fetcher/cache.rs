use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Characters that may not appear in a downloaded file's name.
const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Remove characters that are illegal in file names and trim the result.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Download directory keyed by (artist, title).
///
/// Files are always named `"{artist} - {title}.mp3"`, whatever the source
/// format, so one pair maps to exactly one file across runs.
#[derive(Debug, Clone)]
pub struct MediaCache {
    root: PathBuf,
}

impl MediaCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn local_path(&self, artist: &str, title: &str) -> PathBuf {
        self.root
            .join(sanitize(&format!("{} - {}.mp3", artist, title)))
    }

    /// Create a hidden temporary file in the download directory to stream into.
    ///
    /// It is removed on drop unless committed.
    pub fn staging_file(&self) -> io::Result<NamedTempFile> {
        std::fs::create_dir_all(&self.root)?;
        tempfile::Builder::new()
            .prefix(".download-")
            .suffix(".part")
            .tempfile_in(&self.root)
    }

    /// Move a finished staging file to `path` unless a file is already there.
    ///
    /// Losing the race to another writer is not an error: that file is kept.
    pub fn commit(&self, staging: NamedTempFile, path: &Path) -> io::Result<PathBuf> {
        match staging.persist_noclobber(path) {
            Ok(_) => Ok(path.to_path_buf()),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(path.to_path_buf()),
            Err(e) => Err(e.error),
        }
    }
}
