use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// A table or column that the command refers to does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("Table '{0}' already exists")]
    AlreadyExists(String),

    /// Malformed command grammar, column spec, parentheses or quotes.
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Invalid value '{value}' for column '{column}': {reason}")]
    Type {
        column: String,
        value: String,
        reason: String,
    },

    #[error("Expected {expected} values but got {got}")]
    CountMismatch { expected: usize, got: usize },

    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DbError {
    pub fn table_not_found(table: &str) -> Self {
        Self::NotFound(format!("Table '{table}' does not exist"))
    }

    pub fn column_not_found(table: &str, column: &str) -> Self {
        Self::NotFound(format!("Column '{column}' does not exist in table '{table}'"))
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
