use crate::error::Result;
use crate::engine::output::TableInfo;
use crate::parser::command::Condition;
use crate::storage::{Schema, StorageEngine};
use crate::types::Record;

use super::filter::{filter_records, Predicate};

/// Full scan in storage order, optionally filtered by an equality test.
pub fn select(
    schema: &Schema,
    storage: &dyn StorageEngine,
    table: &str,
    filter: Option<&Condition>,
) -> Result<Vec<Record>> {
    let predicate = filter.map(|c| Predicate::compile(schema, c)).transpose()?;
    let records = storage.load(table)?;
    Ok(filter_records(records, predicate.as_ref()))
}

pub fn info(schema: &Schema, storage: &dyn StorageEngine, table: &str) -> Result<TableInfo> {
    let records = storage.load(table)?;
    Ok(TableInfo {
        table: table.to_string(),
        columns: schema.specs(),
        record_count: records.len(),
    })
}
