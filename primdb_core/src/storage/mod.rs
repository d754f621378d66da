pub mod catalog;
pub mod engine;
pub mod mem;
pub mod schema;
pub mod table;

use std::fs;
use std::path::Path;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use engine::{StorageEngine, TableStamp};
pub use mem::MemStorage;
pub use schema::{Column, Schema};
pub use table::TableStore;

/// Writes `bytes` to a sibling temp file and renames it over `path`.
pub(crate) fn write_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)
}
