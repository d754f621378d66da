use crate::error::{DbError, Result};
use crate::parser::command::Condition;

/// Parses `<column> = <value>`. A value spread over several bare tokens is
/// joined with single spaces.
pub(super) fn parse_condition(tokens: &[String], usage_msg: &str) -> Result<Condition> {
    if tokens.len() < 3 || tokens[1] != "=" {
        return Err(DbError::InvalidFormat(usage_msg.to_string()));
    }
    let column = &tokens[0];
    if is_punct(column) {
        return Err(DbError::InvalidFormat(usage_msg.to_string()));
    }
    let value_tokens = &tokens[2..];
    if value_tokens.iter().any(|t| is_punct(t)) {
        return Err(DbError::InvalidFormat(usage_msg.to_string()));
    }
    Ok(Condition::new(column.clone(), value_tokens.join(" ")))
}

pub(super) fn is_punct(token: &str) -> bool {
    matches!(token, "(" | ")" | "," | "=")
}

pub(super) fn find_keyword(tokens: &[String], keyword: &str) -> Option<usize> {
    tokens.iter().position(|t| t.eq_ignore_ascii_case(keyword))
}
