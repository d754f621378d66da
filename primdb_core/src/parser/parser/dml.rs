use crate::error::{DbError, Result};
use crate::parser::command::Command;
use super::where_clause::{find_keyword, parse_condition};

const INSERT_USAGE: &str = "Usage: insert into <table> values (<v1>, <v2>, ...)";
const UPDATE_USAGE: &str = "Usage: update <table> set <column> = <value> where <column> = <value>";
const DELETE_USAGE: &str = "Usage: delete from <table> where <column> = <value>";

pub(super) fn parse_insert(tokens: &[String]) -> Result<Command> {
    // insert into <table> values (<v1>, <v2>, ...)
    if tokens.len() < 4
        || !tokens[1].eq_ignore_ascii_case("into")
        || !tokens[3].eq_ignore_ascii_case("values")
    {
        return Err(DbError::InvalidFormat(INSERT_USAGE.to_string()));
    }
    let table = tokens[2].clone();
    let list = &tokens[4..];

    let opens = list.iter().filter(|t| *t == "(").count();
    let closes = list.iter().filter(|t| *t == ")").count();
    if opens != closes {
        return Err(DbError::InvalidFormat(
            "Unbalanced parentheses in INSERT values".to_string(),
        ));
    }
    if list.len() < 2 || list[0] != "(" || list[list.len() - 1] != ")" || opens != 1 {
        return Err(DbError::InvalidFormat(format!(
            "Values must be wrapped in one pair of parentheses. {INSERT_USAGE}"
        )));
    }

    let inner = &list[1..list.len() - 1];
    let values = split_values(inner)?;
    Ok(Command::Insert { table, values })
}

/// Splits the tokens between the parentheses on commas. Several bare tokens in
/// one slot are joined with single spaces.
fn split_values(inner: &[String]) -> Result<Vec<String>> {
    if inner.is_empty() {
        return Ok(Vec::new());
    }
    let mut values: Vec<String> = Vec::new();
    for slot in inner.split(|t| t == ",") {
        if slot.is_empty() {
            return Err(DbError::InvalidFormat(
                "Bad INSERT values. Empty value between commas or a trailing comma.".to_string(),
            ));
        }
        if slot.iter().any(|t| t == "=") {
            return Err(DbError::InvalidFormat(INSERT_USAGE.to_string()));
        }
        values.push(slot.join(" "));
    }
    Ok(values)
}

pub(super) fn parse_update(tokens: &[String]) -> Result<Command> {
    // update <table> set <col> = <val> where <col> = <val>
    if tokens.len() < 3 {
        return Err(DbError::InvalidFormat(UPDATE_USAGE.to_string()));
    }
    let table = tokens[1].clone();

    let set_idx = find_keyword(&tokens[2..], "set")
        .map(|i| i + 2)
        .ok_or_else(|| DbError::InvalidFormat(format!("Missing 'set'. {UPDATE_USAGE}")))?;
    if find_keyword(&tokens[2..set_idx], "where").is_some() {
        return Err(DbError::InvalidFormat(format!(
            "'where' must come after 'set'. {UPDATE_USAGE}"
        )));
    }
    if set_idx != 2 {
        return Err(DbError::InvalidFormat(UPDATE_USAGE.to_string()));
    }

    // `set <col> = <value>`: the first value token belongs to the assignment
    // even when it reads `where`.
    let search_from = (set_idx + 4).min(tokens.len());
    let where_idx = find_keyword(&tokens[search_from..], "where")
        .map(|i| i + search_from)
        .ok_or_else(|| DbError::InvalidFormat(format!("Missing 'where'. {UPDATE_USAGE}")))?;

    let assignment = parse_condition(&tokens[set_idx + 1..where_idx], UPDATE_USAGE)?;
    let filter = parse_condition(&tokens[where_idx + 1..], UPDATE_USAGE)?;

    Ok(Command::Update {
        table,
        assignment,
        filter,
    })
}

pub(super) fn parse_delete(tokens: &[String]) -> Result<Command> {
    // delete from <table> where <column> = <value>
    if tokens.len() < 4
        || !tokens[1].eq_ignore_ascii_case("from")
        || !tokens[3].eq_ignore_ascii_case("where")
    {
        return Err(DbError::InvalidFormat(DELETE_USAGE.to_string()));
    }

    let filter = parse_condition(&tokens[4..], DELETE_USAGE)?;
    Ok(Command::Delete {
        table: tokens[2].clone(),
        filter,
    })
}
