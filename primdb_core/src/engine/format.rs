use crate::engine::output::ResultSet;
use crate::storage::Schema;
use crate::types::Record;

/// Projects records onto the schema's columns, rendering each value as text.
/// Keys missing from a record render as the empty string.
pub fn to_result_set(schema: &Schema, records: &[Record]) -> ResultSet {
    let columns = schema.column_names();
    let rows = records
        .iter()
        .map(|record| columns.iter().map(|c| record.rendered(c)).collect())
        .collect();
    ResultSet { columns, rows }
}

/// Formats a SELECT result as a tab-separated table
pub fn format_select(rs: &ResultSet) -> String {
    // Build header line with column names
    let header = rs.columns.join("\t");

    // If no rows, return just the header
    if rs.rows.is_empty() {
        return header;
    }

    let row_lines = rs
        .rows
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, row_lines)
}
