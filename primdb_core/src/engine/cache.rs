use std::collections::HashMap;

use tracing::debug;

use crate::parser::command::Condition;
use crate::storage::TableStamp;
use crate::types::Record;

type CacheKey = (String, Option<Condition>);

#[derive(Debug)]
struct CacheEntry {
    stamp: Option<TableStamp>,
    records: Vec<Record>,
}

/// Select results keyed by table and filter. Owned by the session; every
/// mutation of a table must invalidate that table's entries.
///
/// Each entry remembers the table stamp it was read under and is only served
/// while the stored table still carries that stamp.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        table: &str,
        filter: Option<&Condition>,
        stamp: Option<TableStamp>,
    ) -> Option<&[Record]> {
        let entry = self.entries.get(&(table.to_string(), filter.cloned()))?;
        if entry.stamp != stamp {
            debug!(table, "cached select is stale");
            return None;
        }
        debug!(table, "select served from cache");
        Some(&entry.records)
    }

    pub fn put(
        &mut self,
        table: &str,
        filter: Option<&Condition>,
        stamp: Option<TableStamp>,
        records: Vec<Record>,
    ) {
        self.entries.insert(
            (table.to_string(), filter.cloned()),
            CacheEntry { stamp, records },
        );
    }

    pub fn invalidate_table(&mut self, table: &str) {
        self.entries.retain(|(name, _), _| name != table);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
