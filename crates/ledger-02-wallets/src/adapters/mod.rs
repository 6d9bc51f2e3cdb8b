//! # Adapters
//!
//! - `lock`: process-level exclusive lock on a store root (fs2)

pub mod lock;

pub use lock::{LockError, StoreLock};
