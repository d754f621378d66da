use std::time::SystemTime;

use crate::error::Result;
use crate::types::Record;

/// Identifies one version of a table's persisted contents. Two stamps that
/// differ mean the table may have been rewritten in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStamp {
    pub modified: SystemTime,
    pub len: u64,
}

/// Storage engine trait - abstraction over where table records live
/// (JSON files on disk, or memory for tests and benchmarks).
pub trait StorageEngine {
    /// Reads every record of a table, in storage order.
    /// A table that was never saved has no records.
    fn load(&self, table: &str) -> Result<Vec<Record>>;

    /// Replaces the stored records of a table.
    fn save(&mut self, table: &str, records: &[Record]) -> Result<()>;

    /// Forgets a table's records; returns whether anything was stored.
    fn purge(&mut self, table: &str) -> Result<bool>;

    /// Current version of the table's stored records, or `None` when nothing
    /// is stored. Engines that only change through `save` and `purge` may
    /// always return `None`.
    fn stamp(&self, _table: &str) -> Result<Option<TableStamp>> {
        Ok(None)
    }
}
