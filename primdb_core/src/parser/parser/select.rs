use crate::error::{DbError, Result};
use crate::parser::command::Command;
use super::where_clause::parse_condition;

const SELECT_USAGE: &str = "Usage: select from <table> [where <column> = <value>]";

pub(super) fn parse_select(tokens: &[String]) -> Result<Command> {
    // select from <table> [where <column> = <value>]
    if tokens.len() < 3 || !tokens[1].eq_ignore_ascii_case("from") {
        return Err(DbError::InvalidFormat(SELECT_USAGE.to_string()));
    }
    let table = tokens[2].clone();

    let filter = match tokens.get(3) {
        None => None,
        Some(t) if t.eq_ignore_ascii_case("where") => {
            Some(parse_condition(&tokens[4..], SELECT_USAGE)?)
        }
        Some(_) => return Err(DbError::InvalidFormat(SELECT_USAGE.to_string())),
    };

    Ok(Command::Select { table, filter })
}

pub(super) fn parse_info(tokens: &[String]) -> Result<Command> {
    if tokens.len() != 2 {
        return Err(DbError::InvalidFormat("Usage: info <table>".to_string()));
    }
    Ok(Command::Info {
        table: tokens[1].clone(),
    })
}
