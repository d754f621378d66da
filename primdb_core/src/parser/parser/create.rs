use crate::error::{DbError, Result};
use crate::parser::command::Command;

const CREATE_USAGE: &str = "Usage: create_table <name> <col:type> [<col:type> ...]";
const DROP_USAGE: &str = "Usage: drop_table <name>";

pub(super) fn parse_create_table(tokens: &[String]) -> Result<Command> {
    // create_table <table> <col>:<type> <col>:<type> ...
    if tokens.len() < 3 {
        return Err(DbError::InvalidFormat(CREATE_USAGE.to_string()));
    }
    let table = tokens[1].clone();
    let columns = tokens[2..].to_vec();
    Ok(Command::CreateTable { table, columns })
}

pub(super) fn parse_drop_table(tokens: &[String]) -> Result<Command> {
    if tokens.len() != 2 {
        return Err(DbError::InvalidFormat(DROP_USAGE.to_string()));
    }
    Ok(Command::DropTable {
        table: tokens[1].clone(),
    })
}
