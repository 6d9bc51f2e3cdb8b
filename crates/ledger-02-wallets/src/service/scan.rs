use std::fs::{self, ReadDir};
use std::io::ErrorKind;
use std::path::PathBuf;

use shared_types::Wallet;

use crate::domain::{record_id, WalletsError};

/// Lazy scan of a store root, yielding one wallet per record file.
///
/// Entries that are not records are skipped. A record deleted between
/// listing and reading is skipped as well.
#[derive(Debug)]
pub(crate) struct WalletIter {
    root: PathBuf,
    entries: ReadDir,
}

impl WalletIter {
    pub(crate) fn open(root: PathBuf) -> Result<Self, WalletsError> {
        let entries = fs::read_dir(&root).map_err(WalletsError::io_at(&root))?;
        Ok(Self { root, entries })
    }
}

impl Iterator for WalletIter {
    type Item = Result<Wallet, WalletsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(WalletsError::StorageIo {
                        path: self.root.clone(),
                        source,
                    }))
                }
            };
            let Some(id) = record_id(&entry.file_name()) else {
                continue;
            };
            let path = entry.path();
            match entry.file_type() {
                Ok(kind) if kind.is_file() => {}
                Ok(_) => continue,
                Err(source) => return Some(Err(WalletsError::StorageIo { path, source })),
            }
            match fs::read(&path) {
                Ok(content) => return Some(Ok(Wallet::new(id, content))),
                Err(source) if source.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Some(Err(WalletsError::StorageIo { path, source })),
            }
        }
    }
}
