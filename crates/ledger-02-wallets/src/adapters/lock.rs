//! # Store Lock
//!
//! Serializes identifier allocation and record creation on one store root,
//! across threads and processes. Uses `fs2` for cross-platform file locking
//! (flock on Unix, LockFile on Windows).

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors from store locking
#[derive(Debug)]
pub enum LockError {
    /// Lock file could not be opened or created
    CreateFailed { path: PathBuf, source: io::Error },
    /// The lock call itself failed
    LockFailed { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for LockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockError::CreateFailed { path, source } => {
                write!(f, "Failed to open lock file {}: {}", path.display(), source)
            }
            LockError::LockFailed { path, source } => {
                write!(f, "Failed to lock {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LockError::CreateFailed { source, .. } | LockError::LockFailed { source, .. } => {
                Some(source)
            }
        }
    }
}

// =============================================================================
// STORE LOCK
// =============================================================================

/// Exclusive lock on a wallets store root.
///
/// Blocks until the lock is free, released on drop (RAII). The lock file is
/// left in place: deleting it while another process waits on it would let
/// two holders lock different inodes.
///
/// # Example
///
/// ```ignore
/// let lock = StoreLock::acquire(Path::new("/var/ledger/wallets"))?;
/// // Lock is held until `lock` goes out of scope
/// ```
#[derive(Debug)]
pub struct StoreLock {
    /// The lock file handle (kept open to maintain lock)
    file: File,
    /// Path to the lock file
    path: PathBuf,
}

impl StoreLock {
    /// Lock file name (not a record name, so enumeration skips it)
    pub const LOCK_FILE: &'static str = ".lock";

    /// Acquire the exclusive lock on `root`, waiting for other holders.
    ///
    /// # Errors
    ///
    /// `LockError::CreateFailed` if the lock file cannot be opened,
    /// `LockError::LockFailed` if the OS refuses the lock.
    pub fn acquire(root: &Path) -> Result<Self, LockError> {
        let path = root.join(Self::LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::CreateFailed {
                path: path.clone(),
                source,
            })?;

        FileExt::lock_exclusive(&file).map_err(|source| LockError::LockFailed {
            path: path.clone(),
            source,
        })?;

        Ok(Self { file, path })
    }

    /// Get the path to the lock file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
