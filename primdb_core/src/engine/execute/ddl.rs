use std::path::Path;

use crate::error::Result;
use crate::engine::output::Output;
use crate::storage::{Catalog, StorageEngine};

/// Registers the table and writes the catalog. On a failed write the
/// in-memory catalog is rolled back so it keeps matching the file.
pub(super) fn handle_create(
    table: String,
    columns: Vec<String>,
    catalog: &mut Catalog,
    catalog_path: &Path,
) -> Result<Output> {
    let before = catalog.clone();
    let specs = catalog.create_table(&table, &columns)?.specs();
    if let Err(e) = catalog.save_to_path(catalog_path) {
        *catalog = before;
        return Err(e);
    }
    Ok(Output::Created {
        table,
        columns: specs,
    })
}

/// Removes the table from the catalog. Its records are only purged when
/// `purge` is set; otherwise they stay on disk and reappear if a table with
/// the same name is created again.
pub(super) fn handle_drop(
    table: String,
    catalog: &mut Catalog,
    storage: &mut dyn StorageEngine,
    catalog_path: &Path,
    purge: bool,
) -> Result<Output> {
    let before = catalog.clone();
    catalog.drop_table(&table)?;
    if let Err(e) = catalog.save_to_path(catalog_path) {
        *catalog = before;
        return Err(e);
    }
    let purged = if purge { storage.purge(&table)? } else { false };
    Ok(Output::Dropped { table, purged })
}
