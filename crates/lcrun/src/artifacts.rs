//! Temporary artifacts of a single run
//!
//! Harness sources, input copies and compiled outputs are written next to
//! the solution file under collision-resistant names. An [`Artifacts`] set
//! records each path *before* it is created, so [`Artifacts::release`]
//! removes everything a run produced no matter which step failed.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

/// Random bytes in a name suffix (rendered as twice as many hex chars)
const SUFFIX_BYTES: usize = 8;

/// Marker placed between the stem and the random suffix
const NAME_TAG: &str = "lcrun";

/// Generate a random hex suffix from the operating system CSPRNG
pub fn random_suffix() -> io::Result<String> {
    let mut bytes = [0u8; SUFFIX_BYTES];
    getrandom::getrandom(&mut bytes).map_err(|e| io::Error::other(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// Set of temporary paths created during one run
///
/// # Cleanup
///
/// Call [`release()`](Self::release) once the run is over. Dropping a set
/// that still holds paths (for example when the run's future is cancelled)
/// falls back to synchronous best-effort removal and logs a warning.
#[derive(Debug)]
pub struct Artifacts {
    /// Directory artifacts are created in
    dir: PathBuf,

    /// File stem shared by every artifact name
    stem: String,

    /// Tracked paths, in creation order
    paths: Vec<PathBuf>,
}

impl Artifacts {
    /// Create an empty set for artifacts next to `source`
    ///
    /// Names take the form `<source stem>.lcrun-<hex>.<ext>`.
    pub fn beside(source: &Path) -> Self {
        let dir = match source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "solution".to_owned());
        Self {
            dir,
            stem,
            paths: Vec::new(),
        }
    }

    /// Directory the artifacts live in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths currently tracked
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Reserve a fresh unique path and track it
    ///
    /// `extension` may be empty (e.g. for native binaries on unix).
    pub fn reserve(&mut self, extension: &str) -> io::Result<PathBuf> {
        let suffix = random_suffix()?;
        let mut name = format!("{}.{NAME_TAG}-{suffix}", self.stem);
        if !extension.is_empty() {
            name.push('.');
            name.push_str(extension);
        }
        let path = self.dir.join(name);
        debug!(path = %path.display(), "reserved artifact");
        self.paths.push(path.clone());
        Ok(path)
    }

    /// Write a new uniquely named file and track it
    pub async fn write(&mut self, extension: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.reserve(extension)?;
        tokio::fs::write(&path, contents).await?;
        Ok(path)
    }

    /// Create a new uniquely named directory and track it
    pub async fn create_dir(&mut self) -> io::Result<PathBuf> {
        let path = self.reserve("")?;
        tokio::fs::create_dir(&path).await?;
        Ok(path)
    }

    /// Remove every tracked path that exists
    ///
    /// Failures are logged and do not stop the remaining removals. Returns
    /// the number of paths removed.
    #[instrument(skip(self), fields(count = self.paths.len()))]
    pub async fn release(mut self) -> usize {
        let mut removed = 0;
        for path in std::mem::take(&mut self.paths) {
            let result = match tokio::fs::symlink_metadata(&path).await {
                Ok(meta) if meta.is_dir() => tokio::fs::remove_dir_all(&path).await,
                Ok(_) => tokio::fs::remove_file(&path).await,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    debug!(path = %path.display(), "removed artifact");
                    removed += 1;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "failed to remove artifact"),
            }
        }
        removed
    }
}

impl Drop for Artifacts {
    fn drop(&mut self) {
        if self.paths.is_empty() {
            return;
        }

        warn!(
            count = self.paths.len(),
            "artifacts dropped without explicit release, removing synchronously"
        );

        for path in self.paths.drain(..) {
            let result = match std::fs::symlink_metadata(&path) {
                Ok(meta) if meta.is_dir() => std::fs::remove_dir_all(&path),
                Ok(_) => std::fs::remove_file(&path),
                Err(_) => continue,
            };
            if let Err(e) = result {
                warn!(path = %path.display(), error = %e, "best-effort artifact removal failed");
            }
        }
    }
}
