//! # Domain Layer
//!
//! - `record`: mapping between wallet identifiers and record file names
//! - `errors`: store error taxonomy

pub mod errors;
pub mod record;

pub use errors::WalletsError;
pub use record::{record_file_name, record_id, RECORD_EXTENSION};
