use crate::error::{DbError, Result};
use crate::parser::command::Command;

mod create;
mod dml;
mod select;
mod tokenizer;
mod where_clause;

use create::{parse_create_table, parse_drop_table};
use dml::{parse_delete, parse_insert, parse_update};
use select::{parse_info, parse_select};
use tokenizer::tokenize;

/// Parses one line of shell input into a [`Command`].
///
/// The leading keyword is case-insensitive; table names and values keep
/// their case. `list_tables`, `reload`, `help` and `exit` ignore trailing
/// words.
pub fn parse(input: &str) -> Result<Command> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(DbError::InvalidFormat("Empty command".to_string()));
    }

    let keyword = tokens[0].to_lowercase();

    match keyword.as_str() {
        "create_table" => parse_create_table(&tokens),
        "drop_table" => parse_drop_table(&tokens),
        "list_tables" => Ok(Command::ListTables),
        "insert" => parse_insert(&tokens),
        "select" => parse_select(&tokens),
        "update" => parse_update(&tokens),
        "delete" => parse_delete(&tokens),
        "info" => parse_info(&tokens),
        "reload" => Ok(Command::Reload),
        "help" | "?" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        _ => Err(DbError::UnknownCommand(tokens[0].clone())),
    }
}
