use std::fs;
use std::path::PathBuf;

use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::engine::{StorageEngine, TableStamp};
use crate::storage::write_atomically;
use crate::types::Record;

/// One JSON array file per table under the `tables/` directory.
#[derive(Debug, Clone)]
pub struct TableStore {
    root: PathBuf,
}

impl TableStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn table_file_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.json"))
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl StorageEngine for TableStore {
    /// Reads all records of a table. A table without a file has no records.
    fn load(&self, table: &str) -> Result<Vec<Record>> {
        let path = self.table_file_path(table);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<JsonValue> = serde_json::from_str(&content)?;
        let mut records = Vec::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            match entry {
                JsonValue::Object(obj) => records.push(Record::from_json_object(obj)),
                _ => warn!(table, pos, "skipping non-object entry in table file"),
            }
        }
        debug!(table, rows = records.len(), "table loaded");
        Ok(records)
    }

    /// Rewrites the whole table file.
    fn save(&mut self, table: &str, records: &[Record]) -> Result<()> {
        let rows: Vec<JsonValue> = records.iter().map(Record::to_json).collect();
        let payload = serde_json::to_string_pretty(&rows)?;
        write_atomically(&self.table_file_path(table), payload.as_bytes())?;
        debug!(table, rows = records.len(), "table saved");
        Ok(())
    }

    /// Deletes the table file; returns whether one existed.
    fn purge(&mut self, table: &str) -> Result<bool> {
        match fs::remove_file(self.table_file_path(table)) {
            Ok(()) => {
                debug!(table, "table file removed");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Modification time and size of the table file, so rewrites made by
    /// another process are noticed.
    fn stamp(&self, table: &str) -> Result<Option<TableStamp>> {
        match fs::metadata(self.table_file_path(table)) {
            Ok(meta) => Ok(Some(TableStamp {
                modified: meta.modified()?,
                len: meta.len(),
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
