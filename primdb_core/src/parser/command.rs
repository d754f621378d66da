/// A single `column = value` pair, used by both `set` and `where`.
/// The value is the raw literal; it is coerced against the column's type at
/// execution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Condition {
    pub column: String,
    pub value: String,
}

impl Condition {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

pub type Assignment = Condition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTable {
        table: String,
        columns: Vec<String>,
    },
    DropTable {
        table: String,
    },
    ListTables,
    Insert {
        table: String,
        values: Vec<String>,
    },
    Select {
        table: String,
        filter: Option<Condition>,
    },
    Update {
        table: String,
        assignment: Assignment,
        filter: Condition,
    },
    Delete {
        table: String,
        filter: Condition,
    },
    Info {
        table: String,
    },
    /// Re-read the catalog file, picking up edits made outside the session.
    Reload,
    Help,
    Exit,
}

impl Command {
    /// Commands that remove data and warrant a confirmation prompt.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::DropTable { .. } | Command::Delete { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateTable { .. } => "create_table",
            Command::DropTable { .. } => "drop_table",
            Command::ListTables => "list_tables",
            Command::Insert { .. } => "insert",
            Command::Select { .. } => "select",
            Command::Update { .. } => "update",
            Command::Delete { .. } => "delete",
            Command::Info { .. } => "info",
            Command::Reload => "reload",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}
