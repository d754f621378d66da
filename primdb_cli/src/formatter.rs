use comfy_table::{presets, Cell, ContentArrangement, Table};
use primdb_core::engine::{Output, ResultSet};

/// Renders rows as a bordered table.
pub fn format_rows(rs: &ResultSet) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .load_preset(presets::UTF8_FULL_CONDENSED);

    table.set_header(rs.columns.iter().map(Cell::new));
    for row in &rs.rows {
        table.add_row(row.iter().map(Cell::new));
    }
    table.to_string()
}

pub fn format_output(out: &Output) -> String {
    match out {
        Output::Rows(rs) if rs.rows.is_empty() => "No records found.".to_string(),
        Output::Rows(rs) => format_rows(rs),
        other => other.to_string(),
    }
}

pub const HELP: &str = "\
Table management:
  create_table <name> <col:type> ..   create a table (types: int, str, bool)
  list_tables                         list all tables
  drop_table <name>                   drop a table
  info <name>                         show columns and record count
  reload                              re-read the catalog file

Records:
  insert into <name> values (<v1>, <v2>, ...)
  select from <name> [where <col> = <value>]
  update <name> set <col> = <value> where <col> = <value>
  delete from <name> where <col> = <value>

Other:
  help                                show this help
  exit                                leave the shell";
