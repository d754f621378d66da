use std::fmt;

use serde::Serialize;

use crate::engine::format::format_select;
use crate::types::Record;

/// Rows handed to a pretty-printer: column names and rendered values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of an update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MutationSummary {
    pub count: usize,
    /// Identifier of the first affected record, in storage order.
    pub first_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    pub table: String,
    /// Column specs such as `ID:int`.
    pub columns: Vec<String>,
    pub record_count: usize,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Created { table: String, columns: Vec<String> },
    Dropped { table: String, purged: bool },
    Tables(Vec<String>),
    Inserted { table: String, record: Record },
    Rows(ResultSet),
    Updated { table: String, summary: MutationSummary },
    Deleted { table: String, summary: MutationSummary },
    Info(TableInfo),
    Reloaded { tables: usize },
    Help,
    Exit,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Created { table, columns } => write!(
                f,
                "Table \"{table}\" created with columns: {}",
                columns.join(", ")
            ),
            Output::Dropped { table, purged } => {
                write!(f, "Table \"{table}\" dropped.")?;
                if *purged {
                    write!(f, " Data file removed.")?;
                }
                Ok(())
            }
            Output::Tables(names) if names.is_empty() => write!(f, "No tables."),
            Output::Tables(names) => {
                let lines: Vec<String> = names.iter().map(|n| format!("- {n}")).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Output::Inserted { table, record } => match record.id() {
                Some(id) => write!(f, "Record with ID={id} inserted into \"{table}\"."),
                None => write!(f, "Record inserted into \"{table}\"."),
            },
            Output::Rows(rs) => write!(f, "{}", format_select(rs)),
            Output::Updated { table, summary } => {
                write_summary(f, "updated", table, summary)
            }
            Output::Deleted { table, summary } => {
                write_summary(f, "deleted", table, summary)
            }
            Output::Info(info) => write!(
                f,
                "Table: {}\nColumns: {}\nRecords: {}",
                info.table,
                info.columns.join(", "),
                info.record_count
            ),
            Output::Reloaded { tables } => write!(f, "Catalog reloaded: {tables} table(s)."),
            Output::Help => write!(f, "Type 'help' for the list of commands."),
            Output::Exit => write!(f, "Bye."),
        }
    }
}

fn write_summary(
    f: &mut fmt::Formatter<'_>,
    verb: &str,
    table: &str,
    summary: &MutationSummary,
) -> fmt::Result {
    match (summary.count, summary.first_id) {
        (0, _) => write!(f, "No records matched in \"{table}\"."),
        (1, Some(id)) => write!(f, "Record with ID={id} in \"{table}\" {verb}."),
        (n, Some(id)) => write!(f, "{n} records in \"{table}\" {verb} (first ID={id})."),
        (n, None) => write!(f, "{n} records in \"{table}\" {verb}."),
    }
}
