use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::{Wallet, WalletId};
use uuid::Uuid;

use super::scan::WalletIter;
use crate::adapters::StoreLock;
use crate::domain::{record_file_name, WalletsError};
use crate::ports::{IdGenerator, WalletStream, Wallets};

/// Wallets stored as files in one directory.
///
/// ## Creation Protocol
///
/// 1. Take the exclusive store lock (serializes allocation across threads
///    and processes)
/// 2. Draw a candidate identifier from the generator
/// 3. Write the record to a uniquely named temp file and fsync it
/// 4. Hard-link the temp file to the record name; the link fails if the
///    name exists, so an existing record is never overwritten
/// 5. Remove the temp file, also when an earlier step fails
///
/// Readers see either no record or the complete one.
///
/// # Example
///
/// ```ignore
/// use ledger_02_wallets::{Wallets, WalletsIn};
///
/// let wallets = WalletsIn::new("/var/ledger/wallets");
/// let wallet = wallets.create()?;
/// assert!(wallets.find(wallet.id())?.is_some());
/// ```
pub struct WalletsIn {
    root: PathBuf,
    ids: Mutex<Box<dyn IdGenerator>>,
}

impl WalletsIn {
    /// Store rooted at `root`, drawing identifiers from an entropy-seeded RNG.
    ///
    /// The directory is created on the first `create`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_generator(root, StdRng::from_entropy())
    }

    /// Store drawing identifiers from a deterministic seed.
    ///
    /// Two stores with the same seed allocate the same identifiers.
    pub fn seeded(root: impl Into<PathBuf>, seed: u64) -> Self {
        Self::with_generator(root, StdRng::seed_from_u64(seed))
    }

    /// Store drawing identifiers from `ids`.
    pub fn with_generator(root: impl Into<PathBuf>, ids: impl IdGenerator + 'static) -> Self {
        Self {
            root: root.into(),
            ids: Mutex::new(Box::new(ids)),
        }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: WalletId) -> PathBuf {
        self.root.join(record_file_name(id))
    }

    /// Write `wallet` to `target` without ever replacing an existing file.
    fn commit(&self, wallet: &Wallet, target: &Path) -> Result<(), WalletsError> {
        let temp = TempRecord::write(&self.root, wallet.content())?;

        match fs::hard_link(temp.path(), target) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                Err(WalletsError::DuplicateWallet { id: wallet.id() })
            }
            Err(source) => Err(WalletsError::StorageIo {
                path: target.to_path_buf(),
                source,
            }),
        }
    }
}

impl Wallets for WalletsIn {
    fn iterate(&self) -> Result<WalletStream, WalletsError> {
        Ok(Box::new(WalletIter::open(self.root.clone())?))
    }

    fn create(&self) -> Result<Wallet, WalletsError> {
        fs::create_dir_all(&self.root).map_err(WalletsError::io_at(&self.root))?;
        let _lock = StoreLock::acquire(&self.root)?;

        let id = self.ids.lock().next_id();
        let target = self.record_path(id);
        if target.exists() {
            #[cfg(feature = "tracing-log")]
            tracing::warn!("[ledger-02] Wallet {} already exists in {}", id, self.root.display());
            return Err(WalletsError::DuplicateWallet { id });
        }

        let wallet = Wallet::blank(id);
        self.commit(&wallet, &target)?;

        #[cfg(feature = "tracing-log")]
        tracing::info!("[ledger-02] Created wallet {} in {}", id, self.root.display());
        Ok(wallet)
    }

    fn find(&self, id: WalletId) -> Result<Option<Wallet>, WalletsError> {
        let path = self.record_path(id);
        match fs::read(&path) {
            Ok(content) => Ok(Some(Wallet::new(id, content))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(WalletsError::StorageIo { path, source }),
        }
    }
}

impl std::fmt::Debug for WalletsIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletsIn").field("root", &self.root).finish()
    }
}

/// Uniquely named temp file under a store root, removed on drop.
///
/// Removal also runs when the write fails part way, so a failed `create`
/// leaves nothing behind.
#[derive(Debug)]
pub(super) struct TempRecord {
    path: PathBuf,
}

impl TempRecord {
    /// Create a fresh `.<uuid>.tmp` under `root`, write `bytes` and fsync.
    pub(super) fn write(root: &Path, bytes: &[u8]) -> Result<Self, WalletsError> {
        let path = root.join(format!(".{}.tmp", Uuid::new_v4()));
        let mut file = File::options()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(WalletsError::io_at(&path))?;
        let temp = Self { path };

        let written = file.write_all(bytes).and_then(|()| file.sync_all());
        drop(file);
        written.map_err(WalletsError::io_at(&temp.path))?;
        Ok(temp)
    }

    pub(super) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempRecord {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(_err) => {
                #[cfg(feature = "tracing-log")]
                tracing::warn!(
                    "[ledger-02] Could not remove temp file {}: {}",
                    self.path.display(),
                    _err
                );
            }
        }
    }
}
