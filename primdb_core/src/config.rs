use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./primdb_data";

/// Settings for opening a [`crate::Database`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Directory holding `catalog.json` and the `tables/` folder.
    pub data_dir: PathBuf,
    /// Remove a table's data file when the table is dropped. Off by default,
    /// in which case re-creating the table brings the old rows back.
    pub purge_on_drop: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            purge_on_drop: false,
        }
    }
}

impl DbConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn purge_on_drop(mut self, enabled: bool) -> Self {
        self.purge_on_drop = enabled;
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.data_dir.join("tables")
    }
}
