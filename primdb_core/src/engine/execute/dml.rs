use crate::error::{DbError, Result};
use crate::engine::output::MutationSummary;
use crate::parser::command::{Assignment, Condition};
use crate::storage::{Schema, StorageEngine};
use crate::types::record::ID_COLUMN;
use crate::types::{Record, Value};

use super::filter::Predicate;

/// Inserts one record built from positional raw values and returns it.
///
/// The identifier is one more than the largest identifier currently stored,
/// or 1 for an empty table.
pub fn insert(
    schema: &Schema,
    storage: &mut dyn StorageEngine,
    table: &str,
    raw_values: &[String],
) -> Result<Record> {
    let user_columns = schema.user_columns();
    if raw_values.len() != user_columns.len() {
        return Err(DbError::CountMismatch {
            expected: user_columns.len(),
            got: raw_values.len(),
        });
    }

    let coerced = user_columns
        .iter()
        .zip(raw_values)
        .map(|(col, raw)| col.coerce(raw).map(|v| (col.name.as_str(), v)))
        .collect::<Result<Vec<_>>>()?;

    let mut records = storage.load(table)?;
    let next_id = match records.iter().filter_map(Record::id).max() {
        None => 1,
        Some(max) => max.checked_add(1).ok_or_else(|| {
            DbError::InvalidFormat(format!("Table '{table}' has no identifiers left after ID={max}"))
        })?,
    };

    let mut record = Record::new();
    record.set(ID_COLUMN, Value::Int(next_id));
    for (name, value) in coerced {
        record.set(name, value);
    }

    records.push(record.clone());
    storage.save(table, &records)?;
    Ok(record)
}

/// Assigns the coerced value to every record matching `filter`. The table is
/// rewritten only when something matched.
pub fn update(
    schema: &Schema,
    storage: &mut dyn StorageEngine,
    table: &str,
    assignment: &Assignment,
    filter: &Condition,
) -> Result<MutationSummary> {
    let column = schema
        .column(&assignment.column)
        .ok_or_else(|| DbError::column_not_found(table, &assignment.column))?;
    if column.name == ID_COLUMN {
        return Err(DbError::InvalidFormat(
            "The ID column is assigned automatically and cannot be updated".to_string(),
        ));
    }
    let new_value = column.coerce(&assignment.value)?;
    let predicate = Predicate::compile(schema, filter)?;

    let mut records = storage.load(table)?;
    let mut summary = MutationSummary::default();
    for record in records.iter_mut().filter(|r| predicate.matches(r)) {
        record.set(&column.name, new_value.clone());
        summary.count += 1;
        if summary.first_id.is_none() {
            summary.first_id = record.id();
        }
    }

    if summary.count > 0 {
        storage.save(table, &records)?;
    }
    Ok(summary)
}

/// Removes every record matching `filter`. The table is rewritten only when
/// something was removed.
pub fn delete(
    schema: &Schema,
    storage: &mut dyn StorageEngine,
    table: &str,
    filter: &Condition,
) -> Result<MutationSummary> {
    let predicate = Predicate::compile(schema, filter)?;
    let records = storage.load(table)?;

    let (removed, kept): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(|r| predicate.matches(r));

    if !removed.is_empty() {
        storage.save(table, &kept)?;
    }
    Ok(MutationSummary {
        count: removed.len(),
        first_id: removed.first().and_then(Record::id),
    })
}
