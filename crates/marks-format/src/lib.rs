//! On-disk representation of a bookmark collection.
//!
//! `codec` turns a collection into YAML bytes and back; `storage` moves those bytes
//! to and from the filesystem, replacing the file atomically on every write.

pub mod codec;
pub mod storage;

pub use codec::{decode, encode};
pub use storage::{atomic_write, FsStorage, Storage, DEFAULT_FILE_MODE};
