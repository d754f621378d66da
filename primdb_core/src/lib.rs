use std::path::{Path, PathBuf};

pub mod config;
pub mod engine;
pub mod error;
pub mod parser;
pub mod storage;
pub mod types;

use config::DbConfig;
use engine::{Output, QueryCache};
use error::Result;
use parser::command::Command;
use storage::{Catalog, TableStore};

/// One shell session over a data directory.
///
/// The catalog is loaded once on open and written back after every create or
/// drop; the session's copy is the source of truth for schema lookups until
/// [`Database::reload`] is called.
#[derive(Debug)]
pub struct Database {
    config: DbConfig,
    catalog: Catalog,
    storage: TableStore,
    cache: QueryCache,
}

impl Database {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with(DbConfig::new(path))
    }

    pub fn open_with(config: DbConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let catalog = Catalog::load_from_path(&config.catalog_path())?;
        let storage = TableStore::new(config.tables_dir());
        tracing::debug!(
            data_dir = %config.data_dir.display(),
            tables = catalog.len(),
            "database opened"
        );
        Ok(Self {
            config,
            catalog,
            storage,
            cache: QueryCache::new(),
        })
    }

    /// Parses and executes one command line.
    pub fn execute(&mut self, input: &str) -> Result<Output> {
        let cmd = parser::parser::parse(input)?;
        self.execute_command(cmd)
    }

    pub fn execute_command(&mut self, cmd: Command) -> Result<Output> {
        engine::execute_command(
            cmd,
            &mut self.catalog,
            &mut self.storage,
            &mut self.cache,
            &self.config,
        )
    }

    /// Re-reads the catalog from disk, picking up external edits, and drops
    /// every cached result.
    pub fn reload(&mut self) -> Result<()> {
        self.execute_command(Command::Reload).map(|_| ())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.data_dir
    }
}
