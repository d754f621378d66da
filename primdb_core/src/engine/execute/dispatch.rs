use std::time::Instant;

use tracing::debug;

use crate::config::DbConfig;
use crate::engine::cache::QueryCache;
use crate::engine::format::to_result_set;
use crate::engine::output::Output;
use crate::error::Result;
use crate::parser::command::Command;
use crate::storage::{Catalog, StorageEngine};

use super::ddl::{handle_create, handle_drop};
use super::{dml, select};

/// Executes a parsed command against the catalog and storage engine
pub fn execute_command(
    cmd: Command,
    catalog: &mut Catalog,
    storage: &mut dyn StorageEngine,
    cache: &mut QueryCache,
    config: &DbConfig,
) -> Result<Output> {
    let started = Instant::now();
    let name = cmd.name();
    let result = run(cmd, catalog, storage, cache, config);
    debug!(
        command = name,
        ok = result.is_ok(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "command finished"
    );
    result
}

fn run(
    cmd: Command,
    catalog: &mut Catalog,
    storage: &mut dyn StorageEngine,
    cache: &mut QueryCache,
    config: &DbConfig,
) -> Result<Output> {
    match cmd {
        Command::CreateTable { table, columns } => {
            cache.invalidate_table(&table);
            handle_create(table, columns, catalog, &config.catalog_path())
        }
        Command::DropTable { table } => {
            let out = handle_drop(
                table.clone(),
                catalog,
                storage,
                &config.catalog_path(),
                config.purge_on_drop,
            )?;
            cache.invalidate_table(&table);
            Ok(out)
        }
        Command::ListTables => Ok(Output::Tables(catalog.list_tables())),
        Command::Insert { table, values } => {
            let schema = catalog.describe(&table)?;
            let record = dml::insert(schema, storage, &table, &values)?;
            cache.invalidate_table(&table);
            Ok(Output::Inserted { table, record })
        }
        Command::Select { table, filter } => {
            let schema = catalog.describe(&table)?;
            let stamp = storage.stamp(&table)?;
            let records = match cache.get(&table, filter.as_ref(), stamp) {
                Some(hit) => hit.to_vec(),
                None => {
                    let records = select::select(schema, storage, &table, filter.as_ref())?;
                    cache.put(&table, filter.as_ref(), stamp, records.clone());
                    records
                }
            };
            Ok(Output::Rows(to_result_set(schema, &records)))
        }
        Command::Update {
            table,
            assignment,
            filter,
        } => {
            let schema = catalog.describe(&table)?;
            let summary = dml::update(schema, storage, &table, &assignment, &filter)?;
            if summary.count > 0 {
                cache.invalidate_table(&table);
            }
            Ok(Output::Updated { table, summary })
        }
        Command::Delete { table, filter } => {
            let schema = catalog.describe(&table)?;
            let summary = dml::delete(schema, storage, &table, &filter)?;
            if summary.count > 0 {
                cache.invalidate_table(&table);
            }
            Ok(Output::Deleted { table, summary })
        }
        Command::Info { table } => {
            let schema = catalog.describe(&table)?;
            Ok(Output::Info(select::info(schema, storage, &table)?))
        }
        Command::Reload => {
            *catalog = Catalog::load_from_path(&config.catalog_path())?;
            cache.clear();
            Ok(Output::Reloaded {
                tables: catalog.len(),
            })
        }
        Command::Help => Ok(Output::Help),
        Command::Exit => Ok(Output::Exit),
    }
}
