use std::collections::HashMap;

use crate::error::Result;
use crate::storage::engine::StorageEngine;
use crate::types::Record;

/// In-memory storage implementation using HashMap
#[derive(Debug, Default)]
pub struct MemStorage {
    tables: HashMap<String, Vec<Record>>,
}

impl MemStorage {
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }
}

impl StorageEngine for MemStorage {
    fn load(&self, table: &str) -> Result<Vec<Record>> {
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }

    fn save(&mut self, table: &str, records: &[Record]) -> Result<()> {
        self.tables.insert(table.to_string(), records.to_vec());
        Ok(())
    }

    fn purge(&mut self, table: &str) -> Result<bool> {
        Ok(self.tables.remove(table).is_some())
    }
}
