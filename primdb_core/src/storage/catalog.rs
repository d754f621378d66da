use std::fs;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info};

use crate::error::{DbError, Result};
use crate::storage::schema::{Column, Schema};
use crate::storage::write_atomically;

/// Manages table schemas (metadata catalog). Tables keep their creation order,
/// which is also the order they are written to disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: Vec<(String, Schema)>,
}

impl Catalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Checks if a table exists in the catalog
    pub fn exists(&self, table: &str) -> bool {
        self.tables.iter().any(|(name, _)| name == table)
    }

    /// Registers a table from `name:type` specs. The caller persists the catalog.
    pub fn create_table(&mut self, table: &str, specs: &[String]) -> Result<&Schema> {
        validate_table_name(table)?;
        if self.exists(table) {
            return Err(DbError::AlreadyExists(table.to_string()));
        }
        if specs.is_empty() {
            return Err(DbError::InvalidFormat(
                "A table needs at least one column. Usage: create_table <name> <col:type> ..."
                    .to_string(),
            ));
        }

        let columns = specs
            .iter()
            .map(|s| Column::parse_spec(s))
            .collect::<Result<Vec<_>>>()?;
        let schema = Schema::new(columns)?;

        info!(table, columns = %schema.specs().join(", "), "table created");
        self.tables.push((table.to_string(), schema));
        let (_, schema) = &self.tables[self.tables.len() - 1];
        Ok(schema)
    }

    /// Removes the schema entry. The table's data file is left alone.
    pub fn drop_table(&mut self, table: &str) -> Result<()> {
        let pos = self
            .tables
            .iter()
            .position(|(name, _)| name == table)
            .ok_or_else(|| DbError::table_not_found(table))?;
        self.tables.remove(pos);
        info!(table, "table dropped");
        Ok(())
    }

    /// Table names in lexicographic order
    pub fn list_tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.iter().map(|(name, _)| name.clone()).collect();
        names.sort();
        names
    }

    /// Retrieves the schema for a given table
    pub fn describe(&self, table: &str) -> Result<&Schema> {
        self.tables
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, schema)| schema)
            .ok_or_else(|| DbError::table_not_found(table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Saves catalog metadata to disk as `{ "<table>": ["ID:int", ...] }`.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let mut obj = Map::new();
        for (table, schema) in &self.tables {
            let specs = schema.specs().into_iter().map(JsonValue::String).collect();
            obj.insert(table.clone(), JsonValue::Array(specs));
        }
        let payload = serde_json::to_string_pretty(&JsonValue::Object(obj))?;
        write_atomically(path, payload.as_bytes())?;
        debug!(path = %path.display(), tables = self.tables.len(), "catalog saved");
        Ok(())
    }

    /// Loads catalog metadata from disk. A missing or blank file is an empty catalog.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let file: Map<String, JsonValue> = serde_json::from_str(&content)?;
        let mut tables = Vec::with_capacity(file.len());
        for (table, specs) in file {
            let specs: Vec<String> = serde_json::from_value(specs).map_err(|e| {
                DbError::InvalidFormat(format!("Malformed catalog entry for '{table}': {e}"))
            })?;
            tables.push((table, Schema::from_specs(&specs)?));
        }
        debug!(path = %path.display(), tables = tables.len(), "catalog loaded");
        Ok(Self { tables })
    }
}

/// Table names double as file names, so path-like names are refused.
fn validate_table_name(table: &str) -> Result<()> {
    if table.is_empty()
        || table.starts_with('.')
        || table.contains(['/', '\\', ':'])
        || table.chars().any(char::is_whitespace)
    {
        return Err(DbError::InvalidFormat(format!(
            "Invalid table name '{table}'"
        )));
    }
    Ok(())
}
