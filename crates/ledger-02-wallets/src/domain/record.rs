//! # Record Naming
//!
//! A wallet record is a file directly under the store root named
//! `<16 lowercase hex digits>.z`. Nothing else under the root is a record:
//! temporary files, the lock file and foreign files are ignored.

use std::ffi::OsStr;

use shared_types::WalletId;

/// File extension of wallet records.
pub const RECORD_EXTENSION: &str = "z";

/// File name of the record holding wallet `id`.
pub fn record_file_name(id: WalletId) -> String {
    format!("{}.{}", id, RECORD_EXTENSION)
}

/// Wallet identifier encoded in a record file name, if it is one.
pub fn record_id(file_name: &OsStr) -> Option<WalletId> {
    let name = file_name.to_str()?;
    let stem = name.strip_suffix(RECORD_EXTENSION)?.strip_suffix('.')?;
    stem.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_file_name() {
        assert_eq!(record_file_name(WalletId::new(255)), "00000000000000ff.z");
    }

    #[test]
    fn test_record_id_accepts_canonical_names() {
        assert_eq!(
            record_id(OsStr::new("00000000000000ff.z")),
            Some(WalletId::new(255))
        );
    }

    #[test]
    fn test_record_id_ignores_other_files() {
        for name in [
            ".lock",
            ".5f0c7a3e-8d1b-4c2a-9f6e-1a2b3c4d5e6f.tmp",
            "00000000000000ff",
            "00000000000000ff.z.bak",
            "ff.z",
            "00000000000000FF.z",
            "README.md",
        ] {
            assert_eq!(record_id(OsStr::new(name)), None, "{name}");
        }
    }
}
